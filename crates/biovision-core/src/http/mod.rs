//! Request model for AJAX calls
//!
//! The browser transport lives in the web crate; this module owns
//! everything that can be decided without one:
//! - [`Method`] parsing (case-insensitive, sent upper-cased)
//! - [`RequestSpec`] with the script and CSRF headers
//! - [`Handlers`] routing a [`Completion`] to success or failure callbacks
//! - [`RequestGuard`] keeping one request in flight per control

mod guard;
mod handlers;
mod method;
mod request;

pub use guard::RequestGuard;
pub use handlers::{is_success, Completion, FailureFn, Handlers, Response, SuccessFn};
pub use method::Method;
pub use request::{
    RequestSpec, ACCEPT, APPLICATION_JSON, CONTENT_TYPE, CSRF_TOKEN, REQUESTED_WITH,
    XML_HTTP_REQUEST,
};
