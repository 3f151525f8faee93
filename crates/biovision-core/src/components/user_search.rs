//! User search in the admin area
//!
//! The search endpoint answers with a list of users and `meta.count`.
//! Results fill a `<select>`; picking a user hands its id to the callback
//! named by the container's `data-callback`.

use crate::error::ResponseError;
use crate::jsonapi::Document;

/// Container selector
pub const SELECTOR: &str = ".js-admin-user-search";

/// Build the search request URL
pub fn search_url(base: &str, query: &str) -> String {
    format!("{}?q={}", base, urlencoding::encode(query))
}

/// The search button is enabled once the query is non-empty
pub fn search_enabled(query: &str) -> bool {
    !query.is_empty()
}

/// Id of the chosen option; placeholder and junk values yield `None`
pub fn selected_user_id(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// One `<option>` in the result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub value: String,
    pub label: String,
}

/// Parsed search response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Text of the leading placeholder option (the result count)
    pub count: String,
    pub options: Vec<UserOption>,
}

impl SearchResults {
    /// Extract results from a response document
    ///
    /// Each user is labelled `slug (name)`.
    pub fn from_document(document: &Document) -> Result<Self, ResponseError> {
        let count = document.meta_text("count")?;
        let options = document
            .many()
            .into_iter()
            .map(|user| {
                Ok(UserOption {
                    value: user.id.clone(),
                    label: format!("{} ({})", user.attr_str("slug")?, user.meta_str("name")?),
                })
            })
            .collect::<Result<Vec<_>, ResponseError>>()?;

        Ok(Self { count, options })
    }

    /// Parse a raw response body
    pub fn parse(body: &str) -> Result<Self, ResponseError> {
        Self::from_document(&Document::parse(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url("/admin/users/search", "john doe&co"),
            "/admin/users/search?q=john%20doe%26co"
        );
        assert_eq!(search_url("/u", "иван"), "/u?q=%D0%B8%D0%B2%D0%B0%D0%BD");
    }

    #[test]
    fn test_parse_results() {
        let body = r#"{
            "meta": {"count": 2},
            "data": [
                {"id": 5, "type": "users", "attributes": {"slug": "alice"}, "meta": {"name": "Alice A."}},
                {"id": "9", "type": "users", "attributes": {"slug": "bob"}, "meta": {"name": "Bob"}}
            ]
        }"#;
        let results = SearchResults::parse(body).unwrap();

        assert_eq!(results.count, "2");
        assert_eq!(
            results.options,
            vec![
                UserOption {
                    value: "5".to_string(),
                    label: "alice (Alice A.)".to_string(),
                },
                UserOption {
                    value: "9".to_string(),
                    label: "bob (Bob)".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_no_data_means_no_options() {
        let results = SearchResults::parse(r#"{"meta": {"count": 0}}"#).unwrap();
        assert_eq!(results.count, "0");
        assert!(results.options.is_empty());
    }

    #[test]
    fn test_missing_fields_are_errors() {
        assert_eq!(
            SearchResults::parse(r#"{"data": []}"#),
            Err(ResponseError::MissingField("count".to_string()))
        );
        let body = r#"{"meta": {"count": 1}, "data": [{"id": 1, "attributes": {}}]}"#;
        assert_eq!(
            SearchResults::parse(body),
            Err(ResponseError::MissingField("slug".to_string()))
        );
    }

    #[test]
    fn test_selected_user_id() {
        assert_eq!(selected_user_id("12"), Some(12));
        assert_eq!(selected_user_id(""), None);
        assert_eq!(selected_user_id("0"), None);
        assert_eq!(selected_user_id("abc"), None);
        assert!(!search_enabled(""));
        assert!(search_enabled("a"));
    }
}
