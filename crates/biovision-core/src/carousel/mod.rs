//! Carousel state machine
//!
//! A [`Slider`] owns the per-container state (current position, bounds,
//! autoplay timestamp, touch start) and drives a [`SlideTrack`]. The track is
//! the only thing that touches the page: the web crate implements it over
//! DOM elements, [`MemoryTrack`] implements it in memory for tests.
//!
//! Time is passed in explicitly as milliseconds so the state machine can be
//! driven without a clock.

mod autoplay;
mod css;
mod gesture;
mod layout;
mod memory;
mod options;
mod slider;
mod track;

pub use autoplay::{Autoplay, AUTOPLAY_TOLERANCE};
pub use css::{parse_duration_ms, parse_px};
pub use gesture::{classify_swipe, Swipe, TouchPoint};
pub use layout::{max_item, offset_margin, Offset};
pub use memory::MemoryTrack;
pub use options::{CarouselOptions, LayoutKind, DEFAULT_SETTLE_DELAY_MS};
pub use slider::{Cleanup, CleanupKind, Slider, Step};
pub use track::SlideTrack;
