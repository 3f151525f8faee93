//! Error types for the page components
//!
//! One enum per concern. DOM failures are converted into these at the
//! web boundary so core logic never sees a `JsValue`.

use thiserror::Error;

/// Failures of an AJAX request, routed to the caller's failure callback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced an HTTP response
    #[error("network error requesting {url}")]
    Transport {
        /// Requested URL
        url: String,
    },

    /// The server answered outside the 200..=399 range
    #[error("request to {url} failed with status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
}

impl RequestError {
    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { .. } => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// A response body that does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Body is not valid JSON for the response model
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Valid JSON, but not the structure the caller needs
    #[error("unexpected response: {0}")]
    UnexpectedShape(&'static str),

    /// A required field is absent or has the wrong type
    #[error("missing field '{0}' in response")]
    MissingField(String),
}

/// Carousel construction and transition failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// Container holds no slides
    #[error("carousel has no slides")]
    EmptyTrack,

    /// `data-type` names no known layout
    #[error("unknown carousel type '{0}'")]
    UnknownLayout(String),

    /// An element the carousel depends on is missing
    #[error("carousel element missing: {0}")]
    MissingElement(&'static str),

    /// Slide index outside the track
    #[error("slide {index} out of range (count: {count})")]
    SlideOutOfRange {
        /// Requested slide
        index: usize,
        /// Number of slides
        count: usize,
    },

    /// Invalid markup configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A DOM call failed
    #[error("dom error: {0}")]
    Dom(String),
}

/// Reasons a component did not initialize
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Root selector matched nothing on this page
    #[error("not present on this page")]
    Skipped,

    /// A required element is missing inside the component root
    #[error("element missing: {0}")]
    MissingElement(&'static str),

    /// Invalid markup configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A callback could not be registered
    #[error(transparent)]
    Callback(#[from] CallbackError),

    /// A DOM call failed
    #[error("dom error: {0}")]
    Dom(String),
}

/// Registry bookkeeping failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Identifier already registered at this level
    #[error("component '{0}' is already registered")]
    DuplicateComponent(String),

    /// No component registered under this path
    #[error("unknown component '{0}'")]
    UnknownComponent(String),
}

/// Callback registration and dispatch failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackError {
    /// Name is empty or has an empty dotted segment
    #[error("invalid callback name '{0}'")]
    InvalidName(String),

    /// Name already taken
    #[error("callback '{0}' is already registered")]
    Duplicate(String),

    /// Nothing registered under this name
    #[error("unknown callback '{0}'")]
    Unknown(String),

    /// Arguments do not match what the callback accepts
    #[error("bad arguments for '{name}': {reason}")]
    BadArguments {
        /// Callback name
        name: String,
        /// What was wrong
        reason: &'static str,
    },

    /// The callback ran and failed
    #[error("callback failed: {0}")]
    Failed(String),
}

/// Web storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The browser refuses access (private mode, disabled, quota)
    #[error("{0} is not available")]
    Unavailable(&'static str),

    /// The backend rejected an operation
    #[error("{kind}: {message}")]
    Backend {
        /// `localStorage` or `sessionStorage`
        kind: &'static str,
        /// Backend error text
        message: String,
    },
}

/// Malformed `data-*` configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Attribute present but not parseable
    #[error("invalid value '{value}' for {key}")]
    Invalid {
        /// Attribute name without the `data-` prefix
        key: String,
        /// Raw attribute value
        value: String,
    },

    /// Required attribute absent
    #[error("missing attribute {0}")]
    Missing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RequestError::Status {
            url: "/users".to_string(),
            status: 422,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "request to /users failed with status 422");
        assert_eq!(err.status(), Some(422));

        let err = RequestError::Transport {
            url: "/users".to_string(),
        };
        assert_eq!(err.to_string(), "network error requesting /users");
        assert_eq!(err.status(), None);

        let err = CarouselError::SlideOutOfRange { index: 5, count: 3 };
        assert_eq!(err.to_string(), "slide 5 out of range (count: 3)");

        let err = ConfigError::Invalid {
            key: "timeout".to_string(),
            value: "soon".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value 'soon' for timeout");
    }

    #[test]
    fn test_config_error_converts_into_component_error() {
        let err: ComponentError = ConfigError::Missing("url".to_string()).into();
        assert_eq!(err.to_string(), "missing attribute url");
    }
}
