//! User search in the admin area
//!
//! ```html
//! <div class="js-admin-user-search" data-url="/admin/users/search"
//!      data-callback="userPrivilege.addUser">
//!   <input type="search"> <button disabled>Find</button>
//!   <select></select>
//! </div>
//! ```

use biovision_core::components::user_search::{
    self, search_enabled, search_url, selected_user_id, SearchResults,
};
use biovision_core::{
    AppContext, Component, ComponentError, Handlers, Method, RequestError, RequestGuard, Response,
};
use serde_json::json;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use super::SharedCallbacks;
use crate::{dom, request};

pub struct AdminUserSearch {
    callbacks: SharedCallbacks,
}

impl AdminUserSearch {
    pub fn new(callbacks: SharedCallbacks) -> Self {
        Self { callbacks }
    }
}

impl Component for AdminUserSearch {
    fn initialize(&mut self, ctx: &AppContext) -> Result<(), ComponentError> {
        let document = dom::document()?;
        let root = document
            .query_selector(user_search::SELECTOR)
            .map_err(dom::dom_error)?
            .ok_or(ComponentError::Skipped)?;

        let attrs = dom::data_attributes(&root);
        let url = attrs.require("url")?.to_string();
        let callback = attrs.get("callback").map(str::to_string);
        let input: HtmlInputElement = dom::query_in(&root, "input", "search input")?;
        let button: HtmlButtonElement = dom::query_in(&root, "button", "search button")?;
        let select: HtmlSelectElement = dom::query_in(&root, "select", "results list")?;

        {
            let button = button.clone();
            let field = input.clone();
            dom::listen(&input, "input", move |_: Event| {
                button.set_disabled(!search_enabled(&field.value()));
            })?;
        }

        {
            let ctx = ctx.clone();
            let select = select.clone();
            let target = button.clone();
            let guard = RequestGuard::new();
            dom::listen(&target, "click", move |_: Event| {
                search(&ctx, &url, &input, &button, &select, &guard);
            })?;
        }

        let callbacks = self.callbacks.clone();
        let target = select.clone();
        dom::listen(&target, "change", move |_: Event| {
            pick(&select, callback.as_deref(), &callbacks);
        })
    }
}

fn search(
    ctx: &AppContext,
    url: &str,
    input: &HtmlInputElement,
    button: &HtmlButtonElement,
    select: &HtmlSelectElement,
    guard: &RequestGuard,
) {
    if !guard.try_begin() {
        return;
    }
    button.set_disabled(true);

    let release = {
        let input = input.clone();
        let button = button.clone();
        let guard = guard.clone();
        move || {
            button.set_disabled(!search_enabled(&input.value()));
            guard.finish();
        }
    };
    let on_failure = {
        let release = release.clone();
        move |error: &RequestError| {
            release();
            request::report_handled(error);
        }
    };
    let list = select.clone();
    let handlers = Handlers::new(url)
        .on_success(move |response| {
            release();
            show_results(&list, response);
        })
        .on_failure(on_failure);

    let spec = ctx.json_request(Method::Get, search_url(url, &input.value()));
    if !request::send(&spec, handlers, None) {
        button.set_disabled(!search_enabled(&input.value()));
        guard.finish();
    }
}

fn show_results(select: &HtmlSelectElement, response: &Response) {
    let results = match response.document().and_then(|doc| SearchResults::from_document(&doc)) {
        Ok(results) => results,
        Err(error) => {
            warn!(%error, "unexpected user search response");
            return;
        }
    };

    select.set_inner_html("");
    let placeholder = std::iter::once((results.count.as_str(), ""));
    let users = results
        .options
        .iter()
        .map(|option| (option.label.as_str(), option.value.as_str()));
    for (text, value) in placeholder.chain(users) {
        match HtmlOptionElement::new_with_text_and_value(text, value) {
            Ok(option) => {
                if let Err(e) = select.append_child(&option) {
                    warn!(error = %dom::js_error(&e), "could not add option");
                }
            }
            Err(e) => warn!(error = %dom::js_error(&e), "could not create option"),
        }
    }
    debug!(count = results.options.len(), "user search results shown");
}

fn pick(
    select: &HtmlSelectElement,
    callback: Option<&str>,
    callbacks: &SharedCallbacks,
) {
    let (Some(id), Some(name)) = (selected_user_id(&select.value()), callback) else {
        return;
    };

    let found = callbacks.borrow().get(name);
    let Some(callback) = found else {
        warn!(callback = name, "search callback is not registered");
        return;
    };

    match callback(&[json!(id)]) {
        Ok(()) => {
            let index = select.selected_index();
            let option = u32::try_from(index)
                .ok()
                .and_then(|index| select.options().get_with_index(index))
                .and_then(|option| option.dyn_into::<HtmlOptionElement>().ok());
            if let Some(option) = option {
                option.set_disabled(true);
            }
        }
        Err(error) => warn!(%error, callback = name, "search callback failed"),
    }
}
