//! Entity link checkboxes

use crate::http::Method;

/// Selector for link checkboxes
pub const SELECTOR: &str = ".entity-links input[type=checkbox][data-url]";

/// Checking a box creates the link, unchecking removes it
pub fn link_method(checked: bool) -> Method {
    if checked {
        Method::Put
    } else {
        Method::Delete
    }
}
