//! Component lifecycle and callback dispatch
//!
//! - [`Component`]: the interface every page component implements
//! - [`Registry`]: owns registered components and initializes each once
//! - [`CallbackRegistry`]: named callbacks that server markup can refer to

mod callbacks;
mod component;
mod entry;

pub use callbacks::{id_argument, Callback, CallbackRegistry};
pub use component::Component;
pub use entry::Registry;
