//! Browser bindings for Biovision page components
//!
//! Exposes a `Biovision` class to JavaScript. Typical page script:
//!
//! ```js
//! import init, { Biovision, initLogging } from "./biovision_web.js";
//!
//! await init();
//! initLogging("info");
//! const biovision = new Biovision();
//! biovision.boot();
//! ```
//!
//! ## Modules
//!
//! - [`carousel`]: slider bound to `.js-biovision-carousel`
//! - [`components`]: the smaller page components
//! - [`request`]: `XMLHttpRequest` transport and the default failure handler
//! - [`dom`]: shared DOM helpers
//! - [`logging`]: console subscriber for `tracing`

pub mod carousel;
pub mod components;
pub mod dom;
pub mod logging;
pub mod request;

pub use logging::init_logging;

use std::cell::RefCell;
use std::rc::Rc;

use biovision_core::components::StorageKind;
use biovision_core::{AppContext, CallbackError, CallbackRegistry, Registry};
use serde_json::Value;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;

use components::SharedCallbacks;

fn to_js<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn storage_kind(area: &str) -> Result<StorageKind, JsValue> {
    StorageKind::from_area(area)
        .ok_or_else(|| JsValue::from_str(&format!("unknown storage area '{}'", area)))
}

/// Page-level entry point
#[wasm_bindgen]
pub struct Biovision {
    ctx: AppContext,
    registry: Registry,
    callbacks: SharedCallbacks,
}

#[wasm_bindgen]
impl Biovision {
    /// Read the page context and register the built-in components
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Biovision, JsValue> {
        let document = dom::document().map_err(to_js)?;
        let ctx = dom::read_context(&document);
        let callbacks: SharedCallbacks = Rc::new(RefCell::new(CallbackRegistry::new()));

        let mut registry = Registry::new();
        components::register_all(&mut registry, &callbacks).map_err(to_js)?;
        debug!(locale = ctx.locale(), components = registry.len(), "biovision created");

        Ok(Self {
            ctx,
            registry,
            callbacks,
        })
    }

    /// Initialize every component present on the page
    ///
    /// Safe to call again after the page changes; returns how many
    /// components were initialized by this call.
    pub fn boot(&mut self) -> u32 {
        let count = self.registry.init(&self.ctx);
        info!(count, "components initialized");
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Initialize the children of the component at a dotted path
    #[wasm_bindgen(js_name = initChildren)]
    pub fn init_children(&mut self, path: &str) -> Result<u32, JsValue> {
        let count = self.registry.init_children(path, &self.ctx).map_err(to_js)?;
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    #[wasm_bindgen(js_name = isInitialized)]
    pub fn is_initialized(&self, path: &str) -> Result<bool, JsValue> {
        self.registry.is_initialized(path).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn locale(&self) -> String {
        self.ctx.locale().to_string()
    }

    #[wasm_bindgen(getter, js_name = csrfToken)]
    pub fn csrf_token(&self) -> String {
        self.ctx.csrf_token().to_string()
    }

    /// Names of the registered callbacks
    #[wasm_bindgen(getter)]
    pub fn callbacks(&self) -> Vec<String> {
        self.callbacks.borrow().names().map(str::to_string).collect()
    }

    /// Invoke a registered callback, e.g. `execute("userPrivilege.addUser", [42])`
    ///
    /// Arguments must be JSON-serializable.
    pub fn execute(&self, name: &str, args: js_sys::Array) -> Result<(), JsValue> {
        let json = js_sys::JSON::stringify(&args)?;
        let args: Vec<Value> = serde_json::from_str(&String::from(json)).map_err(|error| {
            warn!(%error, callback = name, "arguments did not round-trip through JSON");
            to_js(CallbackError::BadArguments {
                name: name.to_string(),
                reason: "arguments are not JSON",
            })
        })?;

        // no borrow held while the callback runs
        let callback = self
            .callbacks
            .borrow()
            .get(name)
            .ok_or_else(|| to_js(CallbackError::Unknown(name.to_string())))?;
        callback(&args).map_err(to_js)
    }

    /// Read a value from `"local"` or `"session"` storage
    #[wasm_bindgen(js_name = storageGet)]
    pub fn storage_get(&self, area: &str, key: &str) -> Result<Option<String>, JsValue> {
        components::storage::open(storage_kind(area)?)
            .get(key)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = storageSet)]
    pub fn storage_set(&self, area: &str, key: &str, value: &str) -> Result<(), JsValue> {
        components::storage::open(storage_kind(area)?)
            .set(key, value)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = storageRemove)]
    pub fn storage_remove(&self, area: &str, key: &str) -> Result<(), JsValue> {
        components::storage::open(storage_kind(area)?)
            .remove(key)
            .map_err(to_js)
    }
}
