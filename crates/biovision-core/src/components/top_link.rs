//! "Go to top" link

/// Element id of the link
pub const ELEMENT_ID: &str = "go-to-top";

/// Class present while the link is hidden
pub const INACTIVE_CLASS: &str = "inactive";

/// Vertical scroll offset above which the link is shown
pub const SCROLL_THRESHOLD: f64 = 500.0;

/// Whether the link should carry [`INACTIVE_CLASS`] at scroll offset `y`
pub fn is_inactive(scroll_y: f64) -> bool {
    scroll_y <= SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(is_inactive(0.0));
        assert!(is_inactive(500.0));
        assert!(!is_inactive(500.5));
    }
}
