//! Offset layout arithmetic
//!
//! Widths are in CSS pixels. A slide's width includes its right margin.

/// Last position an offset carousel can scroll to
///
/// Positions past this would leave empty space after the last slide. The
/// result is clamped to `0..items`; an unmeasurable slide (zero width) keeps
/// every position reachable.
pub fn max_item(items: usize, container_width: f64, slide_width: f64) -> usize {
    let last = items.saturating_sub(1);
    if slide_width.is_nan() || slide_width <= 0.0 || !container_width.is_finite() {
        return last;
    }

    let visible = (container_width / slide_width).floor().max(0.0);
    let hidden = items as f64 - visible;
    if hidden <= 0.0 {
        0
    } else {
        (hidden as usize).min(last)
    }
}

/// Leading margin for an offset carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    /// Margin of the first slide, never positive
    pub margin: f64,
    /// The requested position overshot the end and was clamped
    pub snapped: bool,
}

/// Compute the leading margin that shows position `current` first
pub fn offset_margin(
    current: usize,
    items: usize,
    slide_width: f64,
    container_width: f64,
) -> Offset {
    let margin = -(slide_width * current as f64);
    let max_offset = (slide_width * items as f64 - container_width).max(0.0);
    let overshoot = margin + max_offset;

    if overshoot < 0.0 {
        Offset {
            margin: -max_offset,
            snapped: true,
        }
    } else {
        Offset {
            margin: margin.min(0.0),
            snapped: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_max_item() {
        // 5 slides of 200px + 10px margin in a 620px container
        assert_eq!(max_item(5, 620.0, 210.0), 3);
        // Everything fits
        assert_eq!(max_item(3, 1000.0, 210.0), 0);
        // Container narrower than one slide
        assert_eq!(max_item(4, 100.0, 210.0), 3);
        assert_eq!(max_item(4, 620.0, 0.0), 3);
        assert_eq!(max_item(0, 620.0, 210.0), 0);
    }

    #[test]
    fn test_offset_snaps_at_end() {
        assert_eq!(
            offset_margin(2, 5, 210.0, 620.0),
            Offset {
                margin: -420.0,
                snapped: false
            }
        );
        assert_eq!(
            offset_margin(3, 5, 210.0, 620.0),
            Offset {
                margin: -430.0,
                snapped: true
            }
        );
    }

    proptest! {
        #[test]
        fn margin_never_positive_nor_past_end(
            items in 1usize..20,
            current in 0usize..20,
            slide in 1.0f64..400.0,
            container in 0.0f64..3000.0,
        ) {
            let offset = offset_margin(current, items, slide, container);
            let max_offset = (slide * items as f64 - container).max(0.0);
            prop_assert!(offset.margin <= 0.0);
            prop_assert!(offset.margin >= -max_offset - 1e-9);
        }

        #[test]
        fn max_item_within_track(
            items in 1usize..50,
            slide in 0.0f64..400.0,
            container in 0.0f64..5000.0,
        ) {
            prop_assert!(max_item(items, container, slide) < items);
        }
    }
}
