//! DOM helpers shared by the components

use biovision_core::{AppContext, ComponentError, DataAttributes};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

/// Render a JavaScript exception for logs and error values
pub fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Convert a failed DOM call into a component error
pub fn dom_error(value: JsValue) -> ComponentError {
    ComponentError::Dom(js_error(&value))
}

pub fn window() -> Result<Window, ComponentError> {
    web_sys::window().ok_or(ComponentError::MissingElement("window"))
}

pub fn document() -> Result<Document, ComponentError> {
    window()?
        .document()
        .ok_or(ComponentError::MissingElement("document"))
}

/// Current time in milliseconds
pub fn now() -> f64 {
    js_sys::Date::now()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`, cast to `T`
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, ComponentError> {
    let list = document.query_selector_all(selector).map_err(dom_error)?;
    Ok(elements(list)
        .into_iter()
        .filter_map(|element| element.dyn_into::<T>().ok())
        .collect())
}

/// All descendants of `root` matching `selector`, cast to `T`
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, ComponentError> {
    let list = root.query_selector_all(selector).map_err(dom_error)?;
    Ok(elements(list)
        .into_iter()
        .filter_map(|element| element.dyn_into::<T>().ok())
        .collect())
}

/// First descendant of `root` matching `selector`, cast to `T`
pub fn query_in<T: JsCast>(
    root: &Element,
    selector: &str,
    what: &'static str,
) -> Result<T, ComponentError> {
    root.query_selector(selector)
        .map_err(dom_error)?
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or(ComponentError::MissingElement(what))
}

/// Collect an element's `data-*` attributes
pub fn data_attributes(element: &Element) -> DataAttributes {
    let names = element.get_attribute_names();
    DataAttributes::from_attributes(names.iter().filter_map(|name| {
        let name = name.as_string()?;
        let value = element.get_attribute(&name)?;
        Some((name, value))
    }))
}

/// Read locale and CSRF token from the document root
///
/// Missing values become empty strings; the page still starts.
pub fn read_context(document: &Document) -> AppContext {
    let locale = document
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .unwrap_or_default();
    let csrf_token = document
        .query_selector("meta[name=\"csrf-token\"]")
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .unwrap_or_default();

    if locale.is_empty() {
        warn!("document has no lang attribute");
    }
    if csrf_token.is_empty() {
        warn!("document has no csrf-token meta tag");
    }
    AppContext::new(locale, csrf_token)
}

/// Attach an event listener for the lifetime of the page
///
/// Events that are not a `T` are ignored.
pub fn listen<T, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), ComponentError>
where
    T: JsCast + 'static,
    F: FnMut(T) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<T>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`
pub fn set_timeout<F: FnOnce() + 'static>(delay_ms: f64, f: F) -> Result<i32, ComponentError> {
    let callback = Closure::once_into_js(f);
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.max(0.0).round() as i32,
        )
        .map_err(dom_error)
}

/// Run `f` every `interval_ms` for the lifetime of the page
pub fn set_interval<F: FnMut() + 'static>(interval_ms: u32, f: F) -> Result<i32, ComponentError> {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
    let handle = window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        )
        .map_err(dom_error)?;
    closure.forget();
    Ok(handle)
}
