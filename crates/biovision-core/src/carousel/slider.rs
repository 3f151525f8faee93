//! Slider state machine

use tracing::{debug, trace};

use super::{classify_swipe, layout, CarouselOptions, LayoutKind, SlideTrack, Swipe, TouchPoint};
use crate::error::CarouselError;

/// Deferred DOM work that finishes an `offset-cycle` step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupKind {
    /// Move the leading slide to the end once its margin transition ends
    AppendLeading,
    /// Clear the leading slide's margin once the zero-duration move settled
    ClearLeadingMargin,
}

/// A cleanup the caller must schedule, then acknowledge with
/// [`Slider::complete_transition`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cleanup {
    pub kind: CleanupKind,
    /// Fire after this many milliseconds at the latest
    pub delay_ms: f64,
}

impl Cleanup {
    /// Whether the slide's `transitionend` event also completes it
    pub fn awaits_transition_end(&self) -> bool {
        self.kind == CleanupKind::AppendLeading
    }
}

/// Outcome of a slider operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing changed
    Idle,
    /// Rendered; nothing left to do
    Settled,
    /// Rendered the first half of a transition; schedule the cleanup
    Pending(Cleanup),
    /// A previous transition is still pending; request dropped
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// One carousel's state, driving a [`SlideTrack`]
#[derive(Debug)]
pub struct Slider<T: SlideTrack> {
    track: T,
    options: CarouselOptions,
    items: usize,
    current: usize,
    max_item: usize,
    last_slide_at: f64,
    touch_start: Option<TouchPoint>,
    ready: bool,
    pending: Option<Cleanup>,
    transitions: u64,
}

impl<T: SlideTrack> Slider<T> {
    /// Build a slider and render its initial state
    ///
    /// `now` starts the autoplay clock.
    pub fn new(track: T, options: CarouselOptions, now: f64) -> Result<Self, CarouselError> {
        let items = track.len();
        if items == 0 {
            return Err(CarouselError::EmptyTrack);
        }

        let mut slider = Self {
            track,
            options,
            items,
            current: 0,
            max_item: items - 1,
            last_slide_at: now,
            touch_start: None,
            ready: false,
            pending: None,
            transitions: 0,
        };
        slider.rearrange(None)?;
        debug!(kind = %options.kind, items, max_item = slider.max_item, "slider ready");
        Ok(slider)
    }

    /// Advance one position, wrapping to the start after `max_item`
    pub fn next(&mut self, now: f64) -> Result<Step, CarouselError> {
        if self.pending.is_some() {
            return Ok(Step::Busy);
        }

        self.current = if self.current >= self.max_item {
            0
        } else {
            self.current + 1
        };
        self.last_slide_at = now;

        let direction = if self.below_min_width() {
            None
        } else {
            Some(Direction::Forward)
        };
        self.rearrange(direction)
    }

    /// Go back one position, wrapping to `max_item` from the start
    pub fn previous(&mut self, _now: f64) -> Result<Step, CarouselError> {
        if self.pending.is_some() {
            return Ok(Step::Busy);
        }

        self.current = if self.current == 0 {
            self.max_item
        } else {
            self.current - 1
        };

        let direction = if self.below_min_width() {
            None
        } else {
            Some(Direction::Backward)
        };
        self.rearrange(direction)
    }

    /// Re-render in place after the container or viewport was resized
    pub fn relayout(&mut self) -> Result<Step, CarouselError> {
        if self.pending.is_some() {
            return Ok(Step::Busy);
        }
        self.below_min_width();
        self.rearrange(None)
    }

    /// Autoplay timer tick
    pub fn auto_tick(&mut self, now: f64) -> Result<Step, CarouselError> {
        match self.options.autoplay {
            Some(autoplay) if autoplay.is_due(self.last_slide_at, now) => self.next(now),
            _ => Ok(Step::Idle),
        }
    }

    pub fn touch_start(&mut self, point: TouchPoint) {
        self.touch_start = Some(point);
    }

    /// Finish a touch; a horizontal swipe moves the slider
    pub fn touch_end(&mut self, point: TouchPoint, now: f64) -> Result<Step, CarouselError> {
        let Some(start) = self.touch_start.take() else {
            return Ok(Step::Idle);
        };

        match classify_swipe(start, point) {
            Swipe::Next => self.next(now),
            Swipe::Previous => self.previous(now),
            Swipe::Ignored => Ok(Step::Idle),
        }
    }

    /// Bring the slide with id `slide` to the front (thumbnail click)
    pub fn jump_to(&mut self, slide: usize) -> Result<Step, CarouselError> {
        if slide >= self.items {
            return Err(CarouselError::SlideOutOfRange {
                index: slide,
                count: self.items,
            });
        }
        if self.pending.is_some() {
            return Ok(Step::Busy);
        }

        self.track.splice_to_front(slide)?;
        Ok(self.defer(CleanupKind::ClearLeadingMargin, self.options.settle_delay_ms))
    }

    /// Run the pending cleanup, if any, and release the transition guard
    ///
    /// Returns whether a cleanup ran. Safe to call twice for one transition
    /// (`transitionend` racing its fallback timer).
    pub fn complete_transition(&mut self) -> Result<bool, CarouselError> {
        let Some(cleanup) = self.pending.take() else {
            return Ok(false);
        };

        trace!(kind = ?cleanup.kind, "completing transition");
        match cleanup.kind {
            CleanupKind::AppendLeading => self.track.move_leading_to_end()?,
            CleanupKind::ClearLeadingMargin => self.track.clear_leading_margin()?,
        }
        Ok(true)
    }

    /// Current position
    pub fn current(&self) -> usize {
        self.current
    }

    /// Last reachable position
    pub fn max_item(&self) -> usize {
        self.max_item
    }

    pub fn kind(&self) -> LayoutKind {
        self.options.kind
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Whether the initial render happened
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether a cleanup is waiting for [`complete_transition`](Self::complete_transition)
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// The cleanup waiting to run, if any
    pub fn pending(&self) -> Option<Cleanup> {
        self.pending
    }

    /// Number of deferred transitions started so far
    ///
    /// Identifies the pending cleanup, so a stale fallback timer can tell
    /// that its transition already completed.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// When the slider last advanced, in caller milliseconds
    pub fn last_slide_at(&self) -> f64 {
        self.last_slide_at
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    /// Apply the `min_width` guard; returns true if it reset the position
    fn below_min_width(&mut self) -> bool {
        match self.options.min_width {
            Some(min) if self.track.viewport_width() < min => {
                self.current = 0;
                true
            }
            _ => false,
        }
    }

    fn rearrange(&mut self, direction: Option<Direction>) -> Result<Step, CarouselError> {
        let step = match self.options.kind {
            LayoutKind::CurrentItem => {
                self.track.mark_current(self.current)?;
                Step::Settled
            }
            LayoutKind::Offset => {
                self.apply_offset()?;
                Step::Settled
            }
            LayoutKind::OffsetCycle => self.cycle(direction)?,
        };
        self.ready = true;
        Ok(step)
    }

    fn apply_offset(&mut self) -> Result<(), CarouselError> {
        let slide_width = self.track.slide_width()?;
        let container_width = self.track.container_width();

        self.max_item = layout::max_item(self.items, container_width, slide_width);
        self.current = self.current.min(self.max_item);

        let offset = layout::offset_margin(self.current, self.items, slide_width, container_width);
        if offset.snapped {
            self.current = self.max_item;
        }
        self.track.set_leading_margin(offset.margin)
    }

    fn cycle(&mut self, direction: Option<Direction>) -> Result<Step, CarouselError> {
        self.current = 0;
        if !self.ready || self.items < 2 {
            return Ok(Step::Settled);
        }

        match direction {
            Some(Direction::Forward) => {
                let slide_width = self.track.slide_width()?;
                self.track.set_leading_margin(-slide_width)?;
                Ok(self.defer(CleanupKind::AppendLeading, self.track.transition_ms()))
            }
            Some(Direction::Backward) => {
                self.track.splice_trailing_to_front()?;
                Ok(self.defer(CleanupKind::ClearLeadingMargin, self.options.settle_delay_ms))
            }
            None => Ok(Step::Settled),
        }
    }

    fn defer(&mut self, kind: CleanupKind, delay_ms: f64) -> Step {
        let cleanup = Cleanup { kind, delay_ms };
        self.pending = Some(cleanup);
        self.transitions += 1;
        Step::Pending(cleanup)
    }
}
