//! Page Components for Biovision
//!
//! This crate holds the browser-independent half of the Biovision front-end
//! components:
//! - Application context (locale, CSRF token) built once per page
//! - Component registry with exactly-once initialization
//! - Typed callback registry for callbacks named by server markup
//! - Request model (methods, headers, status routing, per-control guards)
//! - JSON:API response model with shape validation
//! - Carousel state machine with three layout strategies
//!
//! ## Architecture
//!
//! - [`context`]: [`AppContext`] passed to every component
//! - [`registry`]: [`Component`] trait, [`Registry`], [`CallbackRegistry`]
//! - [`http`]: [`Method`], [`RequestSpec`], [`Handlers`], [`RequestGuard`]
//! - [`jsonapi`]: [`Document`] and [`Resource`]
//! - [`carousel`]: [`Slider`] driven through the [`SlideTrack`] seam
//! - [`config`]: typed parsing of `data-*` attributes
//! - [`components`]: decision logic shared by the smaller page components
//!
//! ## Example
//!
//! ```rust
//! use biovision_core::carousel::{CarouselOptions, MemoryTrack, Slider};
//!
//! let track = MemoryTrack::new(5, 200.0, 10.0, 620.0);
//! let mut slider = Slider::new(track, CarouselOptions::default(), 0.0).unwrap();
//!
//! slider.next(1_000.0).unwrap();
//! assert_eq!(slider.current(), 1);
//! assert_eq!(slider.max_item(), 3);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: no browser types; the web crate implements the seams
//! 2. **Time Abstraction**: every timed operation takes `now` in milliseconds
//! 3. **Typed Configuration**: markup attributes are parsed once into options

pub mod carousel;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod jsonapi;
pub mod registry;

// Re-export core types for convenience
pub use carousel::{
    CarouselOptions, Cleanup, CleanupKind, LayoutKind, MemoryTrack, SlideTrack, Slider, Step,
    TouchPoint,
};
pub use config::DataAttributes;
pub use context::AppContext;
pub use error::{
    CallbackError, CarouselError, ComponentError, ConfigError, RegistryError, RequestError,
    ResponseError, StorageError,
};
pub use http::{Handlers, Method, RequestGuard, RequestSpec, Response};
pub use jsonapi::{Document, Links, PrimaryData, Resource};
pub use registry::{CallbackRegistry, Component, Registry};
