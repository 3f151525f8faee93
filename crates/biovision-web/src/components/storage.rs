//! Browser storage areas

use biovision_core::components::{StorageBackend, StorageKind, Store};
use biovision_core::{AppContext, CallbackError, Component, ComponentError, StorageError};
use serde_json::Value;
use tracing::debug;

use super::SharedCallbacks;
use crate::dom::{self, js_error};

/// `window.localStorage` or `window.sessionStorage`
pub struct WebStorage {
    kind: StorageKind,
    storage: web_sys::Storage,
}

impl WebStorage {
    fn backend_error(&self, error: &wasm_bindgen::JsValue) -> StorageError {
        StorageError::Backend {
            kind: self.kind.as_str(),
            message: js_error(error),
        }
    }
}

impl StorageBackend for WebStorage {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| self.backend_error(&e))
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| self.backend_error(&e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| self.backend_error(&e))
    }
}

/// Open a storage area; accessing it may itself throw
pub fn open(kind: StorageKind) -> Store<WebStorage> {
    let storage = dom::window().ok().and_then(|window| {
        let area = match kind {
            StorageKind::Local => window.local_storage(),
            StorageKind::Session => window.session_storage(),
        };
        area.ok().flatten()
    });
    Store::new(kind, storage.map(|storage| WebStorage { kind, storage }))
}

fn string_args<'a>(
    name: &str,
    args: &'a [Value],
    count: usize,
) -> Result<Vec<&'a str>, CallbackError> {
    let values: Vec<&str> = args.iter().take(count).filter_map(Value::as_str).collect();
    if values.len() == count {
        Ok(values)
    } else {
        Err(CallbackError::BadArguments {
            name: name.to_string(),
            reason: "expected string arguments",
        })
    }
}

/// Registers `storage.{local,session}.{set,remove}` callbacks
pub struct StorageComponent {
    callbacks: SharedCallbacks,
}

impl StorageComponent {
    pub fn new(callbacks: SharedCallbacks) -> Self {
        Self { callbacks }
    }
}

impl Component for StorageComponent {
    fn initialize(&mut self, _ctx: &AppContext) -> Result<(), ComponentError> {
        let mut callbacks = self.callbacks.borrow_mut();
        for kind in [StorageKind::Local, StorageKind::Session] {
            let area = match kind {
                StorageKind::Local => "local",
                StorageKind::Session => "session",
            };
            debug!(storage = %kind, available = open(kind).available(), "storage probed");

            let set_name = format!("storage.{}.set", area);
            let name = set_name.clone();
            callbacks.register(&set_name, move |args| {
                let values = string_args(&name, args, 2)?;
                open(kind)
                    .set(values[0], values[1])
                    .map_err(|e| CallbackError::Failed(e.to_string()))
            })?;

            let remove_name = format!("storage.{}.remove", area);
            let name = remove_name.clone();
            callbacks.register(&remove_name, move |args| {
                let values = string_args(&name, args, 1)?;
                open(kind)
                    .remove(values[0])
                    .map_err(|e| CallbackError::Failed(e.to_string()))
            })?;
        }
        Ok(())
    }
}
