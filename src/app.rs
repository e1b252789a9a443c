//! Application state and core logic

use crate::config::TuiConfig;
use crate::feed::{FileFeed, TweetFeed};
use crate::state::{
    AppState, Form, LoginForm, NavigationRequest, Tweet, TweetsFocus, View, ViewParams,
    LOCATION_PARAM,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Message shown when the feed cannot be loaded
const FEED_FAILED_MESSAGE: &str = "Failed to retrieve Tweets!";

/// Location shown when the tweets view is opened without one
const UNKNOWN_LOCATION: &str = "Unknown";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Source of tweets for the tweets view
    feed: Box<dyn TweetFeed>,
    /// Navigation issued by a submit, applied after the busy frame is drawn
    pending_navigation: Option<NavigationRequest>,
    /// Whether the app should quit
    quit: bool,
    /// Frame counter driving the busy spinner
    pub tick: usize,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let feed = FileFeed::new(config.tweets_file.clone());
        if let Some(path) = feed.path() {
            tracing::info!("Using feed file {}", path.display());
        }
        Self::with_feed(AppState::with_location(config.location()), Box::new(feed))
    }

    /// Create an App over an explicit state and feed
    pub fn with_feed(state: AppState, feed: Box<dyn TweetFeed>) -> Self {
        Self {
            state,
            feed,
            pending_navigation: None,
            quit: false,
            tick: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance the busy spinner by one frame
    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Whether a submit is waiting for its navigation to run
    pub fn has_pending_navigation(&self) -> bool {
        self.pending_navigation.is_some()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key),
            View::Tweets => self.handle_tweets_key(key).await?,
        }
        Ok(())
    }

    /// Run the navigation queued by the last submit, if any
    pub async fn process_pending_navigation(&mut self) -> Result<()> {
        if let Some(request) = self.pending_navigation.take() {
            self.apply_navigation(request).await?;
        }
        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.view_history.push((
            self.state.current_view,
            std::mem::take(&mut self.state.view_params),
        ));
        self.enter_view(view, params);
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some((view, params)) = self.state.view_history.pop() {
            self.enter_view(view, params);
        }
    }

    /// Hand a navigation request to the view stack and load what the target needs
    pub async fn apply_navigation(&mut self, request: NavigationRequest) -> Result<()> {
        tracing::info!(
            "Navigating to {:?} (location: {:?})",
            request.target,
            request.param(LOCATION_PARAM)
        );
        self.navigate(request.target, request.parameters);
        if self.state.current_view == View::Tweets {
            self.load_tweets().await;
        }
        Ok(())
    }

    fn enter_view(&mut self, view: View, params: ViewParams) {
        match view {
            View::Login => {
                // Every visit gets a fresh form
                let location = self.state.login_form.location().to_string();
                self.state.login_form = LoginForm::with_location(location);
            }
            View::Tweets => self.state.reset_tweets(),
        }
        self.state.current_view = view;
        self.state.view_params = params;
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.login_form;
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                if form.active_field() == LoginForm::USERNAME {
                    form.next_field();
                } else {
                    self.submit_login();
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.clear_active();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c);
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        if self.state.login_form.busy {
            return;
        }
        let Some(request) = self.state.login_form.submit() else {
            return;
        };
        let username = self.state.login_form.username.as_text().trim().to_string();
        tracing::info!("Login submitted for {username}");
        self.state.signed_in_as = Some(username);
        self.pending_navigation = Some(request);
    }

    async fn handle_tweets_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.tweets_focus {
            TweetsFocus::Compose => match key.code {
                KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                    self.state.tweets_focus.toggle();
                }
                KeyCode::Enter => self.post_tweet(),
                code => {
                    let Some(field) = self.state.compose_form.get_active_field_mut() else {
                        return Ok(());
                    };
                    match code {
                        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            field.clear();
                        }
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            field.push_char(c);
                        }
                        KeyCode::Backspace => field.pop_char(),
                        _ => {}
                    }
                }
            },
            TweetsFocus::List => match key.code {
                KeyCode::Esc => self.go_back(),
                KeyCode::Tab | KeyCode::BackTab => self.state.tweets_focus.toggle(),
                KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
                KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
                KeyCode::Char('r') => self.load_tweets().await,
                _ => {}
            },
        }
        Ok(())
    }

    /// Append the composed tweet to the top of the list
    fn post_tweet(&mut self) {
        let Some(content) = self.state.compose_form.take_content() else {
            return;
        };
        let author = self
            .state
            .signed_in_as
            .clone()
            .unwrap_or_else(|| "anonymous".to_string());
        tracing::debug!("Posting local tweet as {author}");
        self.state.tweets.insert(
            0,
            Tweet {
                username: author.clone(),
                handle: author,
                content,
                icon_url: String::new(),
            },
        );
        self.state.selected_index = 0;
    }

    async fn load_tweets(&mut self) {
        let location = self
            .state
            .location()
            .unwrap_or(UNKNOWN_LOCATION)
            .to_string();
        match self.feed.list_tweets(&location).await {
            Ok(tweets) => self.state.set_tweets(tweets),
            Err(e) => {
                tracing::error!("Tweet feed failed: {e:#}");
                self.state.set_tweets(Vec::new());
                self.push_error(FEED_FAILED_MESSAGE);
            }
        }
    }
}
