//! Form state management and form structs

use super::field::FormField;
use crate::state::navigation::{NavigationRequest, View, DEFAULT_LOCATION, LOCATION_PARAM};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Text field under focus, `None` when a button row is focused
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Whether the login button may be enabled for the given raw field values.
///
/// Both values must contain something other than whitespace.
pub fn compute_submit_enabled(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.trim().is_empty()
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: FormField,
    pub password: FormField,
    /// 0=username, 1=password, 2=login button
    pub active_field_index: usize,
    pub submit_enabled: bool,
    /// Latched on submit, never cleared for this form instance
    pub busy: bool,
    location: String,
}

impl LoginForm {
    pub const USERNAME: usize = 0;
    pub const PASSWORD: usize = 1;
    pub const SUBMIT: usize = 2;

    pub fn new() -> Self {
        Self::with_location(DEFAULT_LOCATION)
    }

    /// Create a form that hands `location` to the tweets view on submit
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            username: FormField::text("username", "Username"),
            password: FormField::masked("password", "Password"),
            active_field_index: Self::USERNAME,
            submit_enabled: false,
            busy: false,
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns true if the login button is currently focused
    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == Self::SUBMIT
    }

    /// Re-read both fields and refresh the enabled flag.
    ///
    /// Must run after every edit of either field.
    pub fn on_field_changed(&mut self) -> bool {
        self.submit_enabled =
            compute_submit_enabled(self.username.as_text(), self.password.as_text());
        self.submit_enabled
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if self.busy {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            self.on_field_changed();
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if self.busy {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            self.on_field_changed();
        }
    }

    /// Clear the focused field
    pub fn clear_active(&mut self) {
        if self.busy {
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            field.clear();
            self.on_field_changed();
        }
    }

    /// Mark the form busy and build the request for the tweets view.
    ///
    /// The field predicate is evaluated again here, so a stale enabled flag
    /// never lets an empty form through. Returns `None` without side effects
    /// when the fields are not valid.
    pub fn submit(&mut self) -> Option<NavigationRequest> {
        if !self.on_field_changed() {
            tracing::debug!("Login submit ignored, form incomplete");
            return None;
        }
        self.busy = true;
        Some(NavigationRequest::new(View::Tweets).with_param(LOCATION_PARAM, &self.location))
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        3 // username, password, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            Self::USERNAME => Some(&mut self.username),
            Self::PASSWORD => Some(&mut self.password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            Self::USERNAME => Some(&self.username),
            Self::PASSWORD => Some(&self.password),
            _ => None,
        }
    }
}

// Compose Form (tweets view)
#[derive(Debug, Clone)]
pub struct ComposeForm {
    pub content: FormField,
    pub active_field_index: usize,
}

impl ComposeForm {
    pub fn new() -> Self {
        Self {
            content: FormField::text("content", "What's happening?"),
            active_field_index: 0,
        }
    }

    /// Take the trimmed content if there is any, clearing the field
    pub fn take_content(&mut self) -> Option<String> {
        if self.content.is_blank() {
            return None;
        }
        let content = self.content.as_text().trim().to_string();
        self.content.clear();
        Some(content)
    }
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ComposeForm {
    fn field_count(&self) -> usize {
        1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, _index: usize) {
        self.active_field_index = 0;
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        Some(&mut self.content)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.content),
            _ => None,
        }
    }
}
