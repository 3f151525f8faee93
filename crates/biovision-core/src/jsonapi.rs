//! JSON:API response model
//!
//! Endpoints answer with a top-level object holding optional `data`
//! (one resource or a list), free-form `meta` and pagination `links`.
//! Responses are validated here before any component destructures them, so
//! a missing key becomes a [`ResponseError`] instead of a crash.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::ResponseError;

/// Top-level response document
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Document {
    /// Primary data
    #[serde(default)]
    pub data: Option<PrimaryData>,
    /// Side information (counts, HTML fragments, validation errors)
    #[serde(default)]
    pub meta: Map<String, Value>,
    /// Pagination links
    #[serde(default)]
    pub links: Option<Links>,
}

/// One resource or a list of them
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    /// A list of resources
    Many(Vec<Resource>),
    /// A single resource
    One(Box<Resource>),
}

/// A single resource object
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Resource {
    /// Identifier; numeric ids are kept in their decimal form
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    /// Resource type
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Attributes
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Related resources
    #[serde(default)]
    pub relationships: BTreeMap<String, Relationship>,
    /// Per-resource side information
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// A relationship entry
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Relationship {
    /// Related data
    #[serde(default)]
    pub data: Option<PrimaryData>,
}

/// Pagination links
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Links {
    /// First page
    pub first: Option<String>,
    /// Previous page
    pub prev: Option<String>,
    /// Next page
    pub next: Option<String>,
    /// Last page
    pub last: Option<String>,
    /// This page
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "resource id must be a string or number, got {}",
            other
        ))),
    }
}

fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str, ResponseError> {
    map.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ResponseError::MissingField(key.to_string()))
}

impl Document {
    /// Parse a response body
    pub fn parse(body: &str) -> Result<Self, ResponseError> {
        if body.trim().is_empty() {
            return Err(ResponseError::UnexpectedShape("empty response body"));
        }
        serde_json::from_str(body).map_err(|e| ResponseError::Malformed(e.to_string()))
    }

    /// The single primary resource
    pub fn single(&self) -> Result<&Resource, ResponseError> {
        match &self.data {
            Some(PrimaryData::One(resource)) => Ok(&**resource),
            Some(PrimaryData::Many(_)) => {
                Err(ResponseError::UnexpectedShape("expected a single resource"))
            }
            None => Err(ResponseError::MissingField("data".to_string())),
        }
    }

    /// Primary resources as a list; a single resource becomes a list of one,
    /// absent data an empty list
    pub fn many(&self) -> Vec<&Resource> {
        match &self.data {
            Some(PrimaryData::Many(list)) => list.iter().collect(),
            Some(PrimaryData::One(resource)) => vec![&**resource],
            None => Vec::new(),
        }
    }

    /// A `meta` value
    pub fn meta_value(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    /// A `meta` string
    pub fn meta_str(&self, key: &str) -> Result<&str, ResponseError> {
        str_field(&self.meta, key)
    }

    /// A `meta` value rendered as display text (strings verbatim, numbers
    /// in decimal)
    pub fn meta_text(&self, key: &str) -> Result<String, ResponseError> {
        match self.meta.get(key) {
            Some(Value::String(text)) => Ok(text.clone()),
            Some(Value::Number(number)) => Ok(number.to_string()),
            _ => Err(ResponseError::MissingField(key.to_string())),
        }
    }
}

impl Resource {
    /// Numeric id, if the id is a positive integer
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok().filter(|id| *id > 0)
    }

    /// A string attribute
    pub fn attr_str(&self, key: &str) -> Result<&str, ResponseError> {
        str_field(&self.attributes, key)
    }

    /// A string from the resource's `meta`
    pub fn meta_str(&self, key: &str) -> Result<&str, ResponseError> {
        str_field(&self.meta, key)
    }

    /// The single resource behind a to-one relationship
    pub fn related(&self, name: &str) -> Result<&Resource, ResponseError> {
        match self.relationships.get(name).and_then(|r| r.data.as_ref()) {
            Some(PrimaryData::One(resource)) => Ok(&**resource),
            Some(PrimaryData::Many(_)) => {
                Err(ResponseError::UnexpectedShape("expected a to-one relationship"))
            }
            None => Err(ResponseError::MissingField(format!("relationships.{}", name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_LIST: &str = r#"{
        "data": [
            {"id": 7, "type": "users", "attributes": {"slug": "alice"}, "meta": {"name": "Alice"}},
            {"id": "8", "type": "users", "attributes": {"slug": "bob"}, "meta": {"name": "Bob"}}
        ],
        "meta": {"count": 2},
        "links": {"self": "/users?page=1", "next": "/users?page=2"}
    }"#;

    #[test]
    fn test_parse_resource_list() {
        let doc = Document::parse(USER_LIST).unwrap();
        let users = doc.many();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "7");
        assert_eq!(users[0].numeric_id(), Some(7));
        assert_eq!(users[1].attr_str("slug"), Ok("bob"));
        assert_eq!(users[1].meta_str("name"), Ok("Bob"));
        assert_eq!(doc.meta_text("count"), Ok("2".to_string()));

        let links = doc.links.as_ref().unwrap();
        assert_eq!(links.self_link.as_deref(), Some("/users?page=1"));
        assert_eq!(links.next.as_deref(), Some("/users?page=2"));
        assert_eq!(links.prev, None);
    }

    #[test]
    fn test_single_resource_with_relationship() {
        let body = r#"{
            "data": {
                "id": "3",
                "attributes": {"data": {}},
                "relationships": {
                    "user": {"data": {"id": 12, "attributes": {"screen_name": "carol"}, "meta": {"full_name": "Carol C."}}}
                }
            }
        }"#;
        let doc = Document::parse(body).unwrap();
        let link = doc.single().unwrap();
        let user = link.related("user").unwrap();

        assert_eq!(user.attr_str("screen_name"), Ok("carol"));
        assert_eq!(user.meta_str("full_name"), Ok("Carol C."));
        assert!(link.related("group").is_err());
    }

    #[test]
    fn test_shape_errors_are_typed() {
        assert!(matches!(
            Document::parse("not json"),
            Err(ResponseError::Malformed(_))
        ));
        assert_eq!(
            Document::parse("  "),
            Err(ResponseError::UnexpectedShape("empty response body"))
        );

        let doc = Document::parse(USER_LIST).unwrap();
        assert_eq!(
            doc.single(),
            Err(ResponseError::UnexpectedShape("expected a single resource"))
        );
        assert_eq!(
            doc.meta_str("html"),
            Err(ResponseError::MissingField("html".to_string()))
        );

        let empty = Document::parse("{}").unwrap();
        assert!(empty.many().is_empty());
        assert_eq!(
            empty.single(),
            Err(ResponseError::MissingField("data".to_string()))
        );
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let body = r#"{"data": {"id": true}}"#;
        assert!(matches!(
            Document::parse(body),
            Err(ResponseError::Malformed(_))
        ));
    }
}
