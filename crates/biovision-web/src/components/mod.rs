//! Page components bound to the browser DOM
//!
//! Each component looks for its markup during `initialize` and returns
//! [`ComponentError::Skipped`](biovision_core::ComponentError::Skipped)
//! when the page does not have it.

mod admin_user_search;
mod destroy_button;
mod entity_linker;
pub mod forms;
mod hiding_popups;
pub mod storage;
mod top_linker;
mod user_privilege;

pub use admin_user_search::AdminUserSearch;
pub use destroy_button::DestroyButton;
pub use entity_linker::EntityLinker;
pub use forms::Forms;
pub use hiding_popups::HidingPopups;
pub use storage::{StorageComponent, WebStorage};
pub use top_linker::TopLinker;
pub use user_privilege::UserPrivilege;

use std::cell::RefCell;
use std::rc::Rc;

use biovision_core::{CallbackRegistry, Registry, RegistryError};

use crate::carousel::Carousel;

/// Callback registry shared between components and the page object
pub type SharedCallbacks = Rc<RefCell<CallbackRegistry>>;

/// Ids of the built-in components, in registration order
pub const COMPONENT_IDS: [&str; 9] = [
    "carousel",
    "entityLinker",
    "destroyButton",
    "hidingPopups",
    "topLinker",
    "storage",
    "forms",
    "adminUserSearch",
    "userPrivilege",
];

/// Register every built-in component
pub fn register_all(registry: &mut Registry, callbacks: &SharedCallbacks) -> Result<(), RegistryError> {
    registry.register("carousel", Box::new(Carousel::new()))?;
    registry.register("entityLinker", Box::new(EntityLinker))?;
    registry.register("destroyButton", Box::new(DestroyButton))?;
    registry.register("hidingPopups", Box::new(HidingPopups))?;
    registry.register("topLinker", Box::new(TopLinker))?;
    registry.register("storage", Box::new(StorageComponent::new(callbacks.clone())))?;
    registry.register("forms", Box::new(Forms::new(callbacks.clone())))?;
    registry.register("adminUserSearch", Box::new(AdminUserSearch::new(callbacks.clone())))?;
    registry.register("userPrivilege", Box::new(UserPrivilege::new(callbacks.clone())))?;
    Ok(())
}
