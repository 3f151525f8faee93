//! Popups closed by clicking elsewhere
//!
//! Each `.hiding-popup-container` holds a checkbox (`.popup-control`) whose
//! state shows or hides the popup. A click anywhere closes every popup
//! except the one whose container was clicked.

/// Container class
pub const CONTAINER_SELECTOR: &str = ".hiding-popup-container";

/// Control checkboxes inside containers
pub const CONTROL_SELECTOR: &str = ".hiding-popup-container .popup-control";

/// Indices of the controls to uncheck
///
/// `clicked` is the index of the control in the clicked container, if the
/// click landed inside one.
pub fn controls_to_close(count: usize, clicked: Option<usize>) -> Vec<usize> {
    (0..count).filter(|index| Some(*index) != clicked).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_outside_closes_all() {
        assert_eq!(controls_to_close(3, None), vec![0, 1, 2]);
    }

    #[test]
    fn test_click_inside_keeps_own_popup() {
        assert_eq!(controls_to_close(3, Some(1)), vec![0, 2]);
        assert!(controls_to_close(1, Some(0)).is_empty());
    }
}
