//! Touch swipe classification

/// A touch position in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What a completed touch means for the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left
    Next,
    /// Finger moved right
    Previous,
    /// Mostly vertical (page scroll) or no movement
    Ignored,
}

/// Classify a touch from its start and end points
///
/// Only horizontal-dominant movement counts as a swipe.
pub fn classify_swipe(start: TouchPoint, end: TouchPoint) -> Swipe {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() <= dy.abs() {
        Swipe::Ignored
    } else if dx < 0.0 {
        Swipe::Next
    } else {
        Swipe::Previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify() {
        let start = TouchPoint::new(200.0, 100.0);
        assert_eq!(classify_swipe(start, TouchPoint::new(120.0, 110.0)), Swipe::Next);
        assert_eq!(classify_swipe(start, TouchPoint::new(260.0, 90.0)), Swipe::Previous);
        assert_eq!(classify_swipe(start, TouchPoint::new(210.0, 300.0)), Swipe::Ignored);
        assert_eq!(classify_swipe(start, start), Swipe::Ignored);
    }

    proptest! {
        #[test]
        fn vertical_dominant_is_ignored(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            dx in -500.0f64..500.0,
            dy in -500.0f64..500.0,
        ) {
            prop_assume!(dy.abs() >= dx.abs());
            let swipe = classify_swipe(TouchPoint::new(x, y), TouchPoint::new(x + dx, y + dy));
            prop_assert_eq!(swipe, Swipe::Ignored);
        }

        #[test]
        fn horizontal_direction_decides(
            dx in 1.0f64..500.0,
            dy in -0.99f64..0.99,
        ) {
            let start = TouchPoint::new(0.0, 0.0);
            prop_assert_eq!(classify_swipe(start, TouchPoint::new(-dx, dy)), Swipe::Next);
            prop_assert_eq!(classify_swipe(start, TouchPoint::new(dx, dy)), Swipe::Previous);
        }
    }
}
