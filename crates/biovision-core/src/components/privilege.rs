//! Users granted a privilege
//!
//! The admin user search hands a picked user to
//! [`ADD_USER_CALLBACK`]; the component PATCHes the list URL and appends the
//! user returned by the server.

use serde_json::{json, Value};

use crate::error::ResponseError;
use crate::jsonapi::Document;

/// List selector
pub const SELECTOR: &str = ".js-component-added-users";

/// Callback name the user search refers to in `data-callback`
pub const ADD_USER_CALLBACK: &str = "userPrivilege.addUser";

/// Request body for adding a user
pub fn add_user_body(user_id: u64) -> Value {
    json!({ "user_id": user_id })
}

/// A list row for a newly added user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedUser {
    /// `screen_name (full_name)`
    pub label: String,
    /// Link data serialized as JSON, when there is any
    pub details: Option<String>,
}

impl AddedUser {
    pub fn from_document(document: &Document) -> Result<Self, ResponseError> {
        let link = document.single()?;
        let user = link.related("user")?;
        let label = format!(
            "{} ({})",
            user.attr_str("screen_name")?,
            user.meta_str("full_name")?
        );

        let details = match link.attributes.get("data") {
            Some(Value::Object(map)) if !map.is_empty() => {
                Some(Value::Object(map.clone()).to_string())
            }
            _ => None,
        };

        Ok(Self { label, details })
    }

    pub fn parse(body: &str) -> Result<Self, ResponseError> {
        Self::from_document(&Document::parse(body)?)
    }
}
