//! Completion routing for issued requests

use std::fmt;

use crate::error::{RequestError, ResponseError};
use crate::jsonapi::Document;

/// Success callback
pub type SuccessFn = Box<dyn FnOnce(&Response)>;

/// Failure callback
pub type FailureFn = Box<dyn FnOnce(&RequestError)>;

/// Check whether a status counts as success (200..=399)
pub fn is_success(status: u16) -> bool {
    (200..400).contains(&status)
}

/// A received HTTP response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw body text
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Parse the body as a JSON:API document
    pub fn document(&self) -> Result<Document, ResponseError> {
        Document::parse(&self.body)
    }
}

/// How a request ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The server answered
    Loaded {
        /// HTTP status
        status: u16,
        /// Response body
        body: String,
    },
    /// No response (connection refused, CORS, offline)
    NetworkError,
}

/// Callbacks attached to one request
///
/// Consumed by [`Handlers::complete`], so each request reports exactly once.
pub struct Handlers {
    url: String,
    on_success: Option<SuccessFn>,
    on_failure: Option<FailureFn>,
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("url", &self.url)
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish()
    }
}

impl Handlers {
    /// Handlers for a request to `url` with no callbacks yet
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            on_success: None,
            on_failure: None,
        }
    }

    /// Set the success callback
    pub fn on_success(mut self, f: impl FnOnce(&Response) + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    /// Set the failure callback
    pub fn on_failure(mut self, f: impl FnOnce(&RequestError) + 'static) -> Self {
        self.on_failure = Some(Box::new(f));
        self
    }

    /// Set both from optional boxed callbacks
    pub fn with_callbacks(
        mut self,
        on_success: Option<SuccessFn>,
        on_failure: Option<FailureFn>,
    ) -> Self {
        self.on_success = on_success;
        self.on_failure = on_failure;
        self
    }

    /// Route a completion to the right callback
    ///
    /// - status 200..=399 → success callback
    /// - other statuses → failure callback, else `default_failure`
    /// - network errors → `default_failure`, then the failure callback
    pub fn complete(self, completion: Completion, default_failure: &dyn Fn(&RequestError)) {
        match completion {
            Completion::Loaded { status, body } if is_success(status) => {
                if let Some(on_success) = self.on_success {
                    on_success(&Response::new(status, body));
                }
            }
            Completion::Loaded { status, body } => {
                let error = RequestError::Status {
                    url: self.url,
                    status,
                    body,
                };
                match self.on_failure {
                    Some(on_failure) => on_failure(&error),
                    None => default_failure(&error),
                }
            }
            Completion::NetworkError => {
                let error = RequestError::Transport { url: self.url };
                default_failure(&error);
                if let Some(on_failure) = self.on_failure {
                    on_failure(&error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn handlers(log: &Log, with_failure: bool) -> Handlers {
        let ok = log.clone();
        let handlers = Handlers::new("/items").on_success(move |response| {
            ok.borrow_mut().push(format!("success {}", response.status()));
        });
        if with_failure {
            let failed = log.clone();
            handlers.on_failure(move |error| {
                failed.borrow_mut().push(format!("failure {:?}", error.status()));
            })
        } else {
            handlers
        }
    }

    fn default_into(log: &Log) -> impl Fn(&RequestError) + '_ {
        move |error: &RequestError| log.borrow_mut().push(format!("default {}", error))
    }

    #[test]
    fn test_success_range_boundaries() {
        assert!(!is_success(199));
        assert!(is_success(200));
        assert!(is_success(302));
        assert!(is_success(399));
        assert!(!is_success(400));
    }

    #[test]
    fn test_success_calls_success_callback() {
        let log: Log = Rc::default();
        handlers(&log, true).complete(
            Completion::Loaded {
                status: 204,
                body: String::new(),
            },
            &default_into(&log),
        );
        assert_eq!(*log.borrow(), vec!["success 204"]);
    }

    #[test]
    fn test_status_failure_prefers_caller_callback() {
        let log: Log = Rc::default();
        handlers(&log, true).complete(
            Completion::Loaded {
                status: 500,
                body: String::new(),
            },
            &default_into(&log),
        );
        assert_eq!(*log.borrow(), vec!["failure Some(500)"]);
    }

    #[test]
    fn test_status_failure_without_callback_uses_default() {
        let log: Log = Rc::default();
        handlers(&log, false).complete(
            Completion::Loaded {
                status: 404,
                body: String::new(),
            },
            &default_into(&log),
        );
        assert_eq!(
            *log.borrow(),
            vec!["default request to /items failed with status 404"]
        );
    }

    #[test]
    fn test_network_error_reports_then_notifies_caller() {
        let log: Log = Rc::default();
        handlers(&log, true).complete(Completion::NetworkError, &default_into(&log));
        assert_eq!(
            *log.borrow(),
            vec!["default network error requesting /items", "failure None"]
        );
    }
}
