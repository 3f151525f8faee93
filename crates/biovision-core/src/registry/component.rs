//! Component trait

use crate::context::AppContext;
use crate::error::ComponentError;

/// A page component
///
/// Components are created once per page, registered with the
/// [`Registry`](super::Registry) and initialized at most once.
///
/// # Lifecycle
///
/// 1. **children()**: called once at registration; the returned components
///    become nested registry entries.
/// 2. **initialize()**: find the component's elements and bind listeners.
///    Return [`ComponentError::Skipped`] when the page does not contain the
///    component; the registry then leaves it uninitialized.
///
/// # Example
///
/// ```
/// use biovision_core::{AppContext, Component, ComponentError};
///
/// struct Clock;
///
/// impl Component for Clock {
///     fn initialize(&mut self, _ctx: &AppContext) -> Result<(), ComponentError> {
///         Ok(())
///     }
/// }
/// ```
pub trait Component {
    /// Bind the component to the page
    fn initialize(&mut self, ctx: &AppContext) -> Result<(), ComponentError>;

    /// Nested components, handed over once at registration
    fn children(&mut self) -> Vec<(String, Box<dyn Component>)> {
        Vec::new()
    }

    /// Whether [`Registry::init`](super::Registry::init) also initializes
    /// the children
    fn auto_init_children(&self) -> bool {
        false
    }
}
