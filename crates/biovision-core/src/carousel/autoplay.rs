//! Autoplay timing

/// Fraction of the interval that must have elapsed since the last slide
/// change before an autoplay tick advances
///
/// Interval timers drift, so a tick firing slightly early still counts. A
/// manual slide change pushes the next automatic one back.
pub const AUTOPLAY_TOLERANCE: f64 = 0.95;

/// Autoplay interval, always non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    interval_ms: u32,
}

impl Autoplay {
    /// Interval in milliseconds; zero disables autoplay
    pub fn new(interval_ms: u32) -> Option<Self> {
        (interval_ms > 0).then_some(Self { interval_ms })
    }

    /// Timer interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Whether a tick at `now` should advance the slider
    pub fn is_due(&self, last_slide_at: f64, now: f64) -> bool {
        now - last_slide_at >= f64::from(self.interval_ms) * AUTOPLAY_TOLERANCE
    }
}
