//! Reusable UI components

mod button;
mod dialog;
mod spinner;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
pub use spinner::render_spinner;
