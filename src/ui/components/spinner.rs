//! Busy indicator

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Spinner glyph for the given tick
pub fn spinner_frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// Render a one-line spinner with a label, centered in `area`
pub fn render_spinner(frame: &mut Frame, area: Rect, tick: usize, label: &str) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cycle() {
        assert_eq!(spinner_frame(0), spinner_frame(FRAMES.len()));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}
