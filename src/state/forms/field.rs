//! Form field value objects

/// Represents a single-line text field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    /// Render the value as bullets (password input)
    pub is_masked: bool,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            is_masked: false,
        }
    }

    /// Create a new masked field
    pub fn masked(name: &str, label: &str) -> Self {
        Self {
            is_masked: true,
            ..Self::text(name, label)
        }
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Whether the value is empty once surrounding whitespace is removed
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Replace the value
    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("username", "Username");
        assert_eq!(field.as_text(), "");
        assert!(field.is_blank());
        assert!(!field.is_masked);
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text("username", "Username");
        field.push_char('a');
        field.push_char('b');
        assert_eq!(field.as_text(), "ab");
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text("username", "Username");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut field = FormField::text("username", "Username");
        field.set_text("  \t ");
        assert!(field.is_blank());
        field.set_text(" x ");
        assert!(!field.is_blank());
    }

    #[test]
    fn test_masked_display_hides_value() {
        let mut field = FormField::masked("password", "Password");
        field.set_text("hunter2");
        assert_eq!(field.display_value(), "•••••••");
        assert_eq!(field.as_text(), "hunter2");
    }

    #[test]
    fn test_masked_display_counts_chars_not_bytes() {
        let mut field = FormField::masked("password", "Password");
        field.set_text("пароль");
        assert_eq!(field.display_value().chars().count(), 6);
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text("username", "Username");
        field.set_text("alice");
        field.clear();
        assert!(field.as_text().is_empty());
    }
}
