//! Decision logic for the smaller page components
//!
//! The web crate binds these to elements and events; everything here is
//! plain data in, plain data out.

pub mod destroy;
pub mod forms;
pub mod linker;
pub mod popups;
pub mod privilege;
pub mod storage;
pub mod top_link;
pub mod user_search;

pub use destroy::DestroyTarget;
pub use forms::{error_messages, form_id, FormErrors, SwitchElements};
pub use linker::link_method;
pub use popups::controls_to_close;
pub use privilege::{add_user_body, AddedUser, ADD_USER_CALLBACK};
pub use storage::{StorageBackend, StorageKind, Store, PROBE_KEY};
pub use top_link::{is_inactive, SCROLL_THRESHOLD};
pub use user_search::{search_url, selected_user_id, SearchResults, UserOption};
