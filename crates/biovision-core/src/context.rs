//! Application context shared by every component
//!
//! Built once when the page starts and handed to each component's
//! `initialize`. It replaces a process-wide mutable singleton: nothing
//! writes to it after construction.

use crate::http::{Method, RequestSpec};

/// Locale used when the document declares none
pub const DEFAULT_LOCALE: &str = "en";

/// Page-wide values read from the document root
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppContext {
    locale: String,
    csrf_token: String,
}

impl AppContext {
    /// Create a context from the document's `lang` and CSRF token
    pub fn new(locale: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            csrf_token: csrf_token.into(),
        }
    }

    /// Document locale, e.g. `"ru"`
    pub fn locale(&self) -> &str {
        if self.locale.is_empty() {
            DEFAULT_LOCALE
        } else {
            &self.locale
        }
    }

    /// CSRF token sent with every request
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// Build a request carrying the script and CSRF headers
    pub fn new_request(&self, method: Method, url: impl Into<String>) -> RequestSpec {
        RequestSpec::new(method, url, &self.csrf_token)
    }

    /// Build a request that also sends and accepts JSON
    pub fn json_request(&self, method: Method, url: impl Into<String>) -> RequestSpec {
        RequestSpec::json(method, url, &self.csrf_token)
    }

    /// Localized "are you sure?" prompt for destructive actions
    pub fn confirmation_prompt(&self) -> &'static str {
        match self.locale() {
            "ru" => "Вы уверены?",
            _ => "Are you sure?",
        }
    }
}
