//! Request description handed to the transport

use super::Method;

/// Marker header for script-issued requests
pub const REQUESTED_WITH: &str = "X-Requested-With";
/// Value of [`REQUESTED_WITH`]
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";
/// CSRF token header
pub const CSRF_TOKEN: &str = "X-CSRF-Token";
/// Content type header
pub const CONTENT_TYPE: &str = "Content-Type";
/// Accept header
pub const ACCEPT: &str = "Accept";
/// JSON media type
pub const APPLICATION_JSON: &str = "application/json";

/// Method, URL and headers of a request that has not been sent yet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    method: Method,
    url: String,
    headers: Vec<(&'static str, String)>,
}

impl RequestSpec {
    /// Request with the script marker and CSRF headers
    pub fn new(method: Method, url: impl Into<String>, csrf_token: &str) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![
                (REQUESTED_WITH, XML_HTTP_REQUEST.to_string()),
                (CSRF_TOKEN, csrf_token.to_string()),
            ],
        }
    }

    /// Request that additionally sends and accepts JSON
    pub fn json(method: Method, url: impl Into<String>, csrf_token: &str) -> Self {
        let mut spec = Self::new(method, url, csrf_token);
        spec.headers
            .push((CONTENT_TYPE, APPLICATION_JSON.to_string()));
        spec.headers.push((ACCEPT, APPLICATION_JSON.to_string()));
        spec
    }

    /// Request method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Target URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers in the order they are set on the transport
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// Value of a header (case-insensitive lookup)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Check whether the body is sent as JSON
    pub fn is_json(&self) -> bool {
        self.header(CONTENT_TYPE) == Some(APPLICATION_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_request_headers() {
        let spec = RequestSpec::new(Method::Put, "/links/3", "abc");

        assert_eq!(spec.method(), Method::Put);
        assert_eq!(spec.url(), "/links/3");
        assert_eq!(spec.header("x-requested-with"), Some("XMLHttpRequest"));
        assert_eq!(spec.header(CSRF_TOKEN), Some("abc"));
        assert_eq!(spec.headers().len(), 2);
        assert!(!spec.is_json());
    }

    #[test]
    fn test_json_request_headers() {
        let spec = RequestSpec::json(Method::Get, "/users?q=a", "abc");

        assert_eq!(spec.header(CONTENT_TYPE), Some("application/json"));
        assert_eq!(spec.header(ACCEPT), Some("application/json"));
        assert_eq!(spec.headers().len(), 4);
        assert!(spec.is_json());
    }
}
