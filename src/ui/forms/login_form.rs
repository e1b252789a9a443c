//! Login form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, LoginForm};
use crate::ui::components::{render_button, render_spinner, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

const FORM_WIDTH: u16 = 44;
const FIELD_HEIGHT: u16 = 3;

/// Draw the login screen
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login_form;

    // fields + button + spinner row + borders and padding
    let height = FIELD_HEIGHT * 2 + BUTTON_HEIGHT + 1 + 4;
    let form_area = centered_rect(area, FORM_WIDTH, height);

    let block = Block::default()
        .title(" Android Tweets ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Username
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(BUTTON_HEIGHT), // Login button
            Constraint::Length(1),             // Busy indicator
        ])
        .split(inner);

    let active = form.active_field();
    for (index, area) in [LoginForm::USERNAME, LoginForm::PASSWORD]
        .into_iter()
        .zip([chunks[0], chunks[1]])
    {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, area, field, !form.busy && active == index);
        }
    }
    render_button(
        frame,
        chunks[2],
        "Login",
        form.is_submit_focused(),
        form.submit_enabled && !form.busy,
    );

    if form.busy {
        render_spinner(frame, chunks[3], app.tick, "Signing in...");
    }
}
