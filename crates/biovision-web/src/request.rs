//! AJAX transport over `XMLHttpRequest`

use std::cell::RefCell;
use std::rc::Rc;

use biovision_core::http::Completion;
use biovision_core::{Handlers, RequestError, RequestSpec};
use serde_json::Value;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, XmlHttpRequest, XmlHttpRequestUpload};

use crate::dom::{self, js_error};

/// Element that shows the last request failure, when the page has one
pub const ERROR_ELEMENT_ID: &str = "biovision-ajax-error";

/// An opened request, not yet sent
///
/// Attach upload-progress listeners through [`upload`](Self::upload)
/// before calling one of the `send` methods.
pub struct AjaxRequest {
    xhr: XmlHttpRequest,
    url: String,
}

impl AjaxRequest {
    /// Open a request and wire its completion to `handlers`
    pub fn open(spec: &RequestSpec, handlers: Handlers) -> Result<Self, JsValue> {
        let xhr = XmlHttpRequest::new()?;
        xhr.open_with_async(spec.method().as_str(), spec.url(), true)?;
        for (name, value) in spec.headers() {
            xhr.set_request_header(name, value)?;
        }

        let handlers = Rc::new(RefCell::new(Some(handlers)));

        let on_load = {
            let xhr = xhr.clone();
            let handlers = handlers.clone();
            Closure::wrap(Box::new(move |_: Event| {
                let completion = match xhr.status() {
                    Ok(status) => Completion::Loaded {
                        status,
                        body: xhr.response_text().ok().flatten().unwrap_or_default(),
                    },
                    Err(_) => Completion::NetworkError,
                };
                finish(&handlers, completion);
            }) as Box<dyn FnMut(Event)>)
        };
        let on_error = Closure::wrap(Box::new(move |_: Event| {
            finish(&handlers, Completion::NetworkError);
        }) as Box<dyn FnMut(Event)>);

        xhr.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
        xhr.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
        on_load.forget();
        on_error.forget();

        Ok(Self {
            xhr,
            url: spec.url().to_string(),
        })
    }

    /// Upload progress events target
    pub fn upload(&self) -> Result<XmlHttpRequestUpload, JsValue> {
        self.xhr.upload()
    }

    pub fn xhr(&self) -> &XmlHttpRequest {
        &self.xhr
    }

    /// Send without a body
    pub fn send(&self) -> Result<(), JsValue> {
        debug!(url = %self.url, "sending request");
        self.xhr.send()
    }

    /// Send a JSON body
    pub fn send_json(&self, body: &Value) -> Result<(), JsValue> {
        debug!(url = %self.url, "sending json request");
        self.xhr.send_with_opt_str(Some(&body.to_string()))
    }

    /// Send a `multipart/form-data` body
    ///
    /// Build the spec with [`AppContext::new_request`](biovision_core::AppContext::new_request)
    /// so the browser sets the multipart boundary itself.
    pub fn send_form(&self, form: &FormData) -> Result<(), JsValue> {
        debug!(url = %self.url, "sending form request");
        self.xhr.send_with_opt_form_data(Some(form))
    }
}

fn finish(handlers: &Rc<RefCell<Option<Handlers>>>, completion: Completion) {
    // load and error never both fire, but the handlers are consumed once either way
    let taken = handlers.borrow_mut().take();
    if let Some(handlers) = taken {
        handlers.complete(completion, &report_failure);
    }
}

/// Default failure handler
///
/// Logs the failure and, if the page has an `#biovision-ajax-error`
/// element, shows the error there.
pub fn report_failure(error: &RequestError) {
    warn!(%error, "request failed");

    let Ok(document) = dom::document() else {
        return;
    };
    if let Some(element) = document.get_element_by_id(ERROR_ELEMENT_ID) {
        element.set_text_content(Some(&error.to_string()));
        if let Err(e) = element.class_list().remove_1("hidden") {
            warn!(error = %js_error(&e), "could not reveal error element");
        }
    }
}

/// Failure callback tail for components that handle failures themselves
///
/// Status failures skip the default handler when the caller has its own, so
/// they are reported here. Network failures already went through
/// [`report_failure`].
pub fn report_handled(error: &RequestError) {
    if let RequestError::Status { .. } = error {
        report_failure(error);
    }
}

/// Open and send a request; returns false if the browser refused it
///
/// When this returns false no handler will ever run.
pub fn send(spec: &RequestSpec, handlers: Handlers, body: Option<&Value>) -> bool {
    let result = AjaxRequest::open(spec, handlers).and_then(|request| match body {
        Some(body) => request.send_json(body),
        None => request.send(),
    });
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(url = spec.url(), error = %js_error(&e), "could not send request");
            false
        }
    }
}
