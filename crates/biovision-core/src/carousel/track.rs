//! The seam between the slider and the page

use crate::error::CarouselError;

/// The slides of one carousel, in their current document order
///
/// Positions are indices into the current order. Slide ids are the
/// original indices assigned when the carousel was built (`data-index` in
/// markup) and survive reordering.
///
/// Margins are applied with the slides' CSS transition unless stated
/// otherwise.
pub trait SlideTrack {
    /// Number of slides
    fn len(&self) -> usize;

    /// Check if the track holds no slides
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inner width of the slide container
    fn container_width(&self) -> f64;

    /// Width of the leading slide including its right margin
    fn slide_width(&self) -> Result<f64, CarouselError>;

    /// Current viewport width, for the `min_width` guard
    fn viewport_width(&self) -> f64;

    /// Duration of the slides' CSS transition in milliseconds
    fn transition_ms(&self) -> f64;

    /// Move the current-item marker to the slide at `position`
    fn mark_current(&mut self, position: usize) -> Result<(), CarouselError>;

    /// Animate the leading slide's left margin to `margin`
    fn set_leading_margin(&mut self, margin: f64) -> Result<(), CarouselError>;

    /// Animate the leading slide's left margin back to zero
    fn clear_leading_margin(&mut self) -> Result<(), CarouselError>;

    /// Move the leading slide to the end, clearing its margin without a
    /// transition
    fn move_leading_to_end(&mut self) -> Result<(), CarouselError>;

    /// Move the trailing slide to the front without a transition, with a
    /// negative margin equal to its own width so nothing visibly moves
    fn splice_trailing_to_front(&mut self) -> Result<(), CarouselError>;

    /// Move the slide with id `slide` to the front without a transition,
    /// hidden behind a negative margin like
    /// [`splice_trailing_to_front`](Self::splice_trailing_to_front)
    fn splice_to_front(&mut self, slide: usize) -> Result<(), CarouselError>;
}
