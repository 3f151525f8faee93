//! Delete buttons

use crate::config::DataAttributes;
use crate::error::ConfigError;

/// The two kinds of delete buttons found in markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyTarget {
    /// `<div data-destroy-url><button class="destroy">`: removes the div
    Container,
    /// `<button class="destroy" data-url>` inside a list: removes the
    /// enclosing `li[data-id]`, after confirmation
    ListItem,
}

impl DestroyTarget {
    pub const ALL: [DestroyTarget; 2] = [DestroyTarget::Container, DestroyTarget::ListItem];

    /// Selector matching the buttons
    pub fn button_selector(&self) -> &'static str {
        match self {
            Self::Container => "div[data-destroy-url] button.destroy",
            Self::ListItem => "button.destroy[data-url]",
        }
    }

    /// Selector of the ancestor removed after a successful delete
    pub fn removed_selector(&self) -> &'static str {
        match self {
            Self::Container => "div[data-destroy-url]",
            Self::ListItem => "li[data-id]",
        }
    }

    /// Whether the user must confirm first
    pub fn confirms(&self) -> bool {
        matches!(self, Self::ListItem)
    }

    /// Delete URL, read from the container (`Container`) or the button
    /// (`ListItem`) attributes
    pub fn url<'a>(&self, attrs: &'a DataAttributes) -> Result<&'a str, ConfigError> {
        match self {
            Self::Container => attrs.require("destroy-url"),
            Self::ListItem => attrs.require("url"),
        }
    }
}
