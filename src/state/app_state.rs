//! Application state definitions

use super::forms::{ComposeForm, LoginForm};
use super::navigation::{View, ViewParams, LOCATION_PARAM};
use std::collections::VecDeque;

/// Focus state for the tweets view (list vs compose field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweetsFocus {
    #[default]
    List,
    Compose,
}

impl TweetsFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::List => Self::Compose,
            Self::Compose => Self::List,
        };
    }
}

/// A single tweet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub username: String,
    pub handle: String,
    pub content: String,
    /// Profile image URL, empty when the feed has none
    pub icon_url: String,
}

impl Tweet {
    /// Handle prefixed with `@`, as shown in the list
    pub fn display_handle(&self) -> String {
        format!("@{}", self.handle)
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Login view
    pub login_form: LoginForm,
    /// Username entered on the last successful submit
    pub signed_in_as: Option<String>,

    // Tweets view
    pub tweets: Vec<Tweet>,
    pub tweets_loaded: bool,
    pub selected_index: usize,
    pub tweets_focus: TweetsFocus,
    pub compose_form: ComposeForm,

    // Modal errors, oldest first
    pub errors: VecDeque<String>,
}

impl AppState {
    /// Create state whose login form forwards `location`
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            login_form: LoginForm::with_location(location),
            ..Self::default()
        }
    }

    /// Location parameter of the current view
    pub fn location(&self) -> Option<&str> {
        self.view_params.get(LOCATION_PARAM).map(String::as_str)
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tweets.len() {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Replace the tweet list and reset the selection
    pub fn set_tweets(&mut self, tweets: Vec<Tweet>) {
        self.tweets = tweets;
        self.tweets_loaded = true;
        self.selected_index = 0;
    }

    /// Clear everything owned by the tweets view
    pub fn reset_tweets(&mut self) {
        self.tweets.clear();
        self.tweets_loaded = false;
        self.selected_index = 0;
        self.tweets_focus = TweetsFocus::default();
        self.compose_form = ComposeForm::default();
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tweet(handle: &str) -> Tweet {
        Tweet {
            username: handle.to_uppercase(),
            handle: handle.to_string(),
            content: format!("hello from {handle}"),
            icon_url: String::new(),
        }
    }

    mod tweets_focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_list() {
            assert_eq!(TweetsFocus::default(), TweetsFocus::List);
        }

        #[test]
        fn test_toggle_round_trips() {
            let mut focus = TweetsFocus::List;
            focus.toggle();
            assert_eq!(focus, TweetsFocus::Compose);
            focus.toggle();
            assert_eq!(focus, TweetsFocus::List);
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_down_stops_at_last() {
            let mut state = AppState::default();
            state.set_tweets(vec![tweet("a"), tweet("b")]);
            state.move_selection_down();
            state.move_selection_down();
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_move_up_stops_at_zero() {
            let mut state = AppState::default();
            state.set_tweets(vec![tweet("a")]);
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_move_down_on_empty_list() {
            let mut state = AppState::default();
            state.move_selection_down();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_set_tweets_resets_selection() {
            let mut state = AppState::default();
            state.set_tweets(vec![tweet("a"), tweet("b")]);
            state.selected_index = 1;
            state.set_tweets(vec![tweet("c")]);
            assert_eq!(state.selected_index, 0);
            assert!(state.tweets_loaded);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_errors_are_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_dismiss_on_empty_is_noop() {
            let mut state = AppState::default();
            state.dismiss_error();
            assert!(state.current_error().is_none());
        }
    }

    #[test]
    fn test_with_location_configures_login_form() {
        let state = AppState::with_location("Arlington");
        assert_eq!(state.login_form.location(), "Arlington");
        assert_eq!(state.current_view, View::Login);
    }

    #[test]
    fn test_location_reads_view_params() {
        let mut state = AppState::default();
        assert_eq!(state.location(), None);
        state
            .view_params
            .insert(LOCATION_PARAM.to_string(), "Washington D.C.".to_string());
        assert_eq!(state.location(), Some("Washington D.C."));
    }

    #[test]
    fn test_display_handle() {
        assert_eq!(tweet("nick").display_handle(), "@nick");
    }
}
