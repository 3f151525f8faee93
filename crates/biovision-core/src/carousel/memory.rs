//! In-memory slide track for tests and headless use

use super::SlideTrack;
use crate::error::CarouselError;

/// A [`SlideTrack`] that records what a DOM track would render
///
/// All slides share one width. Only the leading slide carries a margin, which
/// matches how the slider uses the page.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryTrack {
    order: Vec<usize>,
    slide_width: f64,
    slide_margin: f64,
    container_width: f64,
    viewport_width: f64,
    transition_ms: f64,
    leading_margin: f64,
    marked: Option<usize>,
}

impl MemoryTrack {
    /// Default transition duration in milliseconds
    pub const TRANSITION_MS: f64 = 300.0;

    /// Create a track of `count` slides, each `slide_width` wide with
    /// `slide_margin` to its right
    pub fn new(count: usize, slide_width: f64, slide_margin: f64, container_width: f64) -> Self {
        Self {
            order: (0..count).collect(),
            slide_width,
            slide_margin,
            container_width,
            viewport_width: container_width,
            transition_ms: Self::TRANSITION_MS,
            leading_margin: 0.0,
            marked: None,
        }
    }

    pub fn with_transition_ms(mut self, transition_ms: f64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    /// Slide ids in document order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Left margin of the leading slide
    pub fn leading_margin(&self) -> f64 {
        self.leading_margin
    }

    /// Position carrying the current-item marker
    pub fn marked(&self) -> Option<usize> {
        self.marked
    }

    fn hide_leading(&mut self) {
        self.leading_margin = -(self.slide_width + self.slide_margin);
    }
}

impl SlideTrack for MemoryTrack {
    fn len(&self) -> usize {
        self.order.len()
    }

    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn slide_width(&self) -> Result<f64, CarouselError> {
        if self.order.is_empty() {
            return Err(CarouselError::EmptyTrack);
        }
        Ok(self.slide_width + self.slide_margin)
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn transition_ms(&self) -> f64 {
        self.transition_ms
    }

    fn mark_current(&mut self, position: usize) -> Result<(), CarouselError> {
        if position >= self.order.len() {
            return Err(CarouselError::SlideOutOfRange {
                index: position,
                count: self.order.len(),
            });
        }
        self.marked = Some(position);
        Ok(())
    }

    fn set_leading_margin(&mut self, margin: f64) -> Result<(), CarouselError> {
        self.leading_margin = margin;
        Ok(())
    }

    fn clear_leading_margin(&mut self) -> Result<(), CarouselError> {
        self.leading_margin = 0.0;
        Ok(())
    }

    fn move_leading_to_end(&mut self) -> Result<(), CarouselError> {
        if self.order.is_empty() {
            return Err(CarouselError::EmptyTrack);
        }
        self.order.rotate_left(1);
        self.leading_margin = 0.0;
        Ok(())
    }

    fn splice_trailing_to_front(&mut self) -> Result<(), CarouselError> {
        if self.order.is_empty() {
            return Err(CarouselError::EmptyTrack);
        }
        self.order.rotate_right(1);
        self.hide_leading();
        Ok(())
    }

    fn splice_to_front(&mut self, slide: usize) -> Result<(), CarouselError> {
        let position = self
            .order
            .iter()
            .position(|id| *id == slide)
            .ok_or(CarouselError::SlideOutOfRange {
                index: slide,
                count: self.order.len(),
            })?;
        let id = self.order.remove(position);
        self.order.insert(0, id);
        self.hide_leading();
        Ok(())
    }
}
