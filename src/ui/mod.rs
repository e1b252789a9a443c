//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod tweets;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Login => forms::draw_login(frame, main_area, app),
        View::Tweets => tweets::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal overlay last so it sits on top
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
