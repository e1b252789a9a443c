//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::{TweetsFocus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and the one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(user) = &app.state.signed_in_as {
        if app.state.current_view == View::Tweets {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Logged in as {user}"),
                Style::default().fg(Color::Green),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Login if app.state.login_form.busy => "Signing in...".to_string(),
        View::Login => "Tab:next  Enter:login  ^U:clear  Esc:quit".to_string(),
        View::Tweets => match app.state.tweets_focus {
            TweetsFocus::List => "j/k:nav  Tab:compose  r:refresh  Esc:back".to_string(),
            TweetsFocus::Compose => "Enter:post  ^U:clear  Esc:list".to_string(),
        },
    }
}
