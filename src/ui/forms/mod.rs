//! Form rendering

mod field_renderer;
mod login_form;

pub use field_renderer::draw_field;
pub use login_form::draw_login;
