//! View identifiers and navigation requests

use std::collections::BTreeMap;

/// Parameter key carrying the location handed to the tweets view
pub const LOCATION_PARAM: &str = "location";

/// Location passed on login when no override is configured
pub const DEFAULT_LOCATION: &str = "Washington D.C.";

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Tweets,
}

/// View parameters for navigation
pub type ViewParams = BTreeMap<String, String>;

/// A request to move to another view, carrying named parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: View,
    pub parameters: ViewParams,
}

impl NavigationRequest {
    pub fn new(target: View) -> Self {
        Self {
            target,
            parameters: ViewParams::new(),
        }
    }

    /// Add a parameter, replacing any previous value for the key
    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_view_is_login() {
        assert_eq!(View::default(), View::Login);
    }

    #[test]
    fn test_request_without_params() {
        let request = NavigationRequest::new(View::Tweets);
        assert_eq!(request.target, View::Tweets);
        assert!(request.parameters.is_empty());
        assert_eq!(request.param(LOCATION_PARAM), None);
    }

    #[test]
    fn test_with_param_replaces_value() {
        let request = NavigationRequest::new(View::Tweets)
            .with_param(LOCATION_PARAM, "Boston")
            .with_param(LOCATION_PARAM, DEFAULT_LOCATION);
        assert_eq!(request.parameters.len(), 1);
        assert_eq!(request.param(LOCATION_PARAM), Some("Washington D.C."));
    }
}
