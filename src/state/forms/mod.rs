//! Form domain layer
//!
//! Type-safe form handling for the login and compose inputs.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{ComposeForm, Form, LoginForm};
