//! Typed access to `data-*` markup attributes
//!
//! Server-rendered markup configures each component through a small set of
//! `data-*` attributes on its root element. They are collected once at bind
//! time into [`DataAttributes`] and parsed into an options struct, so
//! handlers never re-read the DOM for configuration.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::ConfigError;

/// Data attributes of one element, keyed without the `data-` prefix
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataAttributes {
    values: BTreeMap<String, String>,
}

impl DataAttributes {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect from `(attribute name, value)` pairs, keeping only `data-*`
    pub fn from_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = attributes
            .into_iter()
            .filter_map(|(name, value)| {
                name.as_ref()
                    .strip_prefix("data-")
                    .map(|key| (key.to_string(), value.into()))
            })
            .collect();
        Self { values }
    }

    /// Builder-style insert, used by tests and by callers that already
    /// stripped the prefix
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Raw value; empty strings count as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Check whether the attribute is present and non-empty
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Raw value, or [`ConfigError::Missing`]
    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    /// Parse a value; absent → `Ok(None)`, unparseable → error
    pub fn parse<T: FromStr>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::Invalid {
                    key: key.to_string(),
                    value: raw.to_string(),
                }),
        }
    }

    /// Leading integer of a value, read the way `parseInt` reads it
    ///
    /// `"5000ms"` gives 5000, `"-1"` gives -1. `None` when the key is absent
    /// or the value does not start with an integer.
    pub fn leading_int(&self, key: &str) -> Option<i64> {
        let raw = self.get(key)?.trim_start();
        let (sign, digits) = match raw.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        let value = digits[..end].parse::<i64>().ok()?;
        Some(sign * value)
    }

    /// Number of collected attributes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no attributes were collected
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_only_data_attributes() {
        let attrs = DataAttributes::from_attributes([
            ("class", "js-biovision-carousel"),
            ("data-type", "offset-cycle"),
            ("data-timeout", "5000"),
        ]);

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("type"), Some("offset-cycle"));
        assert_eq!(attrs.get("class"), None);
    }

    #[test]
    fn test_parse_numbers() {
        let attrs = DataAttributes::new()
            .with("timeout", " 4000 ")
            .with("min-width", "640.5")
            .with("broken", "soon");

        assert_eq!(attrs.parse::<u32>("timeout"), Ok(Some(4000)));
        assert_eq!(attrs.parse::<f64>("min-width"), Ok(Some(640.5)));
        assert_eq!(attrs.parse::<u32>("absent"), Ok(None));
        assert!(matches!(
            attrs.parse::<u32>("broken"),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_leading_int() {
        let attrs = DataAttributes::new()
            .with("plain", "5000")
            .with("suffixed", "5000ms")
            .with("negative", "-1")
            .with("padded", "  +42 ")
            .with("text", "soon")
            .with("sign-only", "-");

        assert_eq!(attrs.leading_int("plain"), Some(5000));
        assert_eq!(attrs.leading_int("suffixed"), Some(5000));
        assert_eq!(attrs.leading_int("negative"), Some(-1));
        assert_eq!(attrs.leading_int("padded"), Some(42));
        assert_eq!(attrs.leading_int("text"), None);
        assert_eq!(attrs.leading_int("sign-only"), None);
        assert_eq!(attrs.leading_int("absent"), None);
    }

    #[test]
    fn test_empty_value_is_absent() {
        let attrs = DataAttributes::new().with("url", "  ");
        assert!(!attrs.contains("url"));
        assert_eq!(
            attrs.require("url"),
            Err(ConfigError::Missing("url".to_string()))
        );
    }
}
