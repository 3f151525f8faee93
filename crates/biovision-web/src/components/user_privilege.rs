//! Users granted a privilege
//!
//! Registers the `userPrivilege.addUser` callback, which the admin user
//! search invokes with the picked user's id.

use biovision_core::components::privilege::{self, add_user_body, AddedUser, ADD_USER_CALLBACK};
use biovision_core::registry::id_argument;
use biovision_core::{
    AppContext, CallbackError, Component, ComponentError, Handlers, Method, RequestGuard,
    Response,
};
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::SharedCallbacks;
use crate::{dom, request};

pub struct UserPrivilege {
    callbacks: SharedCallbacks,
}

impl UserPrivilege {
    pub fn new(callbacks: SharedCallbacks) -> Self {
        Self { callbacks }
    }
}

impl Component for UserPrivilege {
    fn initialize(&mut self, ctx: &AppContext) -> Result<(), ComponentError> {
        let document = dom::document()?;
        let list = document
            .query_selector(privilege::SELECTOR)
            .map_err(dom::dom_error)?
            .ok_or(ComponentError::Skipped)?;
        let url = dom::data_attributes(&list).get("url").map(str::to_string);

        let ctx = ctx.clone();
        let guard = RequestGuard::new();
        self.callbacks
            .borrow_mut()
            .register(ADD_USER_CALLBACK, move |args| {
                let id = id_argument(ADD_USER_CALLBACK, args)?;
                let url = url
                    .as_deref()
                    .ok_or_else(|| CallbackError::Failed("list has no data-url".to_string()))?;
                if !guard.try_begin() {
                    return Err(CallbackError::Failed(
                        "another user is being added".to_string(),
                    ));
                }

                let spec = ctx.json_request(Method::Patch, url);
                let target = list.clone();
                let done = guard.clone();
                let failed = guard.clone();
                let handlers = Handlers::new(url)
                    .on_success(move |response| {
                        done.finish();
                        append_user(&target, response);
                    })
                    .on_failure(move |error| {
                        failed.finish();
                        request::report_handled(error);
                    });
                if request::send(&spec, handlers, Some(&add_user_body(id))) {
                    Ok(())
                } else {
                    guard.finish();
                    Err(CallbackError::Failed(format!("could not send request to {}", url)))
                }
            })?;
        Ok(())
    }
}

fn append_user(list: &Element, response: &Response) {
    let user = match response.document().and_then(|doc| AddedUser::from_document(&doc)) {
        Ok(user) => user,
        Err(error) => {
            warn!(%error, "unexpected privilege response");
            return;
        }
    };
    let Ok(document) = dom::document() else {
        return;
    };
    if let Err(e) = render(&document, list, &user) {
        warn!(error = %dom::js_error(&e), "could not append user");
    }
}

fn render(document: &Document, list: &Element, user: &AddedUser) -> Result<(), JsValue> {
    let item = document.create_element("li")?;
    let label = document.create_element("div")?;
    label.set_text_content(Some(&user.label));
    item.append_child(&label)?;

    if let Some(details) = &user.details {
        let block = document.create_element("div")?;
        block.set_text_content(Some(details));
        item.append_child(&block)?;
    }
    list.append_child(&item)?;
    Ok(())
}
