//! Carousel configuration from `data-*` attributes

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use super::Autoplay;
use crate::config::DataAttributes;
use crate::error::CarouselError;

/// Delay between a zero-duration DOM move and clearing the margin it set,
/// so the browser animates the clear
pub const DEFAULT_SETTLE_DELAY_MS: f64 = 50.0;

/// How a carousel arranges its slides (`data-type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    /// Highlight the current slide with a marker class
    CurrentItem,
    /// Scroll the track by shifting the first slide's margin
    #[default]
    Offset,
    /// Endless rotation: slides are moved between the ends of the track
    OffsetCycle,
}

impl LayoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentItem => "current-item",
            Self::Offset => "offset",
            Self::OffsetCycle => "offset-cycle",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "current-item" => Ok(Self::CurrentItem),
            "offset" => Ok(Self::Offset),
            "offset-cycle" => Ok(Self::OffsetCycle),
            other => Err(CarouselError::UnknownLayout(other.to_string())),
        }
    }
}

/// Per-container carousel settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// `data-type`
    pub kind: LayoutKind,
    /// `data-timeout`; absent, zero or negative means no autoplay
    pub autoplay: Option<Autoplay>,
    /// `data-min-width`: below this viewport width the carousel stays on
    /// the first position
    pub min_width: Option<f64>,
    /// `data-settle-delay`
    pub settle_delay_ms: f64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            kind: LayoutKind::default(),
            autoplay: None,
            min_width: None,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl CarouselOptions {
    /// Parse from the container's data attributes
    pub fn from_attributes(attrs: &DataAttributes) -> Result<Self, CarouselError> {
        let kind = match attrs.get("type") {
            Some(value) => value.parse()?,
            None => LayoutKind::default(),
        };
        let autoplay = Self::autoplay_from(attrs);
        let min_width = attrs.parse::<f64>("min-width")?;
        let settle_delay_ms = attrs
            .parse::<f64>("settle-delay")?
            .filter(|delay| *delay >= 0.0)
            .unwrap_or(DEFAULT_SETTLE_DELAY_MS);

        Ok(Self {
            kind,
            autoplay,
            min_width,
            settle_delay_ms,
        })
    }

    /// `data-timeout`: a leading positive integer enables autoplay; zero,
    /// negative and unreadable values leave it off
    fn autoplay_from(attrs: &DataAttributes) -> Option<Autoplay> {
        match attrs.leading_int("timeout") {
            Some(ms) if ms > 0 => Autoplay::new(u32::try_from(ms).unwrap_or(u32::MAX)),
            Some(_) => None,
            None => {
                if let Some(raw) = attrs.get("timeout") {
                    warn!(value = raw, "unreadable carousel timeout, autoplay off");
                }
                None
            }
        }
    }

    pub fn with_kind(mut self, kind: LayoutKind) -> Self {
        self.kind = kind;
        self
    }

    /// Enable autoplay; zero disables it
    pub fn with_autoplay(mut self, interval_ms: u32) -> Self {
        self.autoplay = Autoplay::new(interval_ms);
        self
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }
}
