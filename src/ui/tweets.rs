//! Tweets view rendering

use super::forms::draw_field;
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::{Tweet, TweetsFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Title shown above the list
pub fn tweets_title(location: &str) -> String {
    format!("Tweets near {location}")
}

/// Draw the tweets view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Tweet list
            Constraint::Length(3), // Compose field
        ])
        .split(area);

    draw_list(frame, chunks[0], app);

    let compose_active = app.state.tweets_focus == TweetsFocus::Compose;
    draw_field(frame, chunks[1], &app.state.compose_form.content, compose_active);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let location = app.state.location().unwrap_or("Unknown");
    let list_focused = app.state.tweets_focus == TweetsFocus::List;
    let border_style = if list_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ", tweets_title(location)))
        .borders(Borders::ALL)
        .border_style(border_style);

    if app.state.tweets.is_empty() {
        let message = if app.state.tweets_loaded {
            "No tweets yet."
        } else {
            "Loading..."
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app.state.tweets.iter().map(tweet_item).collect();
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    render_scrollable_list(frame, area, list, app.state.selected_index);
}

/// Author header, then content, then the avatar URL when there is one
fn tweet_item(tweet: &Tweet) -> ListItem<'_> {
    let header = Line::from(vec![
        Span::styled(
            tweet.username.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(tweet.display_handle(), Style::default().fg(Color::DarkGray)),
    ]);
    let mut lines = vec![header, Line::from(Span::raw(tweet.content.as_str()))];
    if !tweet.icon_url.is_empty() {
        lines.push(Line::from(Span::styled(
            tweet.icon_url.as_str(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )));
    }
    ListItem::new(lines)
}
