//! Browser tests for components that talk to the server
//!
//! The endpoints used here do not exist on the test server, so every
//! request completes with a 404.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use biovision_core::components::ADD_USER_CALLBACK;
use biovision_core::{
    AppContext, CallbackError, CallbackRegistry, Component, Handlers, Method, RequestError,
};
use biovision_web::components::{AdminUserSearch, EntityLinker, SharedCallbacks, UserPrivilege};
use biovision_web::dom;
use biovision_web::request::{AjaxRequest, ERROR_ELEMENT_ID};
use serde_json::json;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const ERROR_MARKUP: &str = r#"<div id="biovision-ajax-error" class="hidden"></div>"#;

fn fixture(id: &str, html: &str) -> Element {
    let document = dom::document().unwrap();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    root.set_inner_html(&format!("{}{}", html, ERROR_MARKUP));
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn ctx() -> AppContext {
    AppContext::new("en", "test-token")
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Poll until `done` holds, for at most two seconds
async fn wait_until<F: Fn() -> bool>(done: F) -> bool {
    for _ in 0..100 {
        if done() {
            return true;
        }
        sleep(20).await;
    }
    done()
}

fn error_shown() -> bool {
    dom::document()
        .unwrap()
        .get_element_by_id(ERROR_ELEMENT_ID)
        .map(|element| !element.class_list().contains("hidden"))
        .unwrap_or(false)
}

fn hide_error() {
    if let Some(element) = dom::document().unwrap().get_element_by_id(ERROR_ELEMENT_ID) {
        element.class_list().add_1("hidden").unwrap();
    }
}

#[wasm_bindgen_test]
async fn test_failed_link_reverts_checkbox_and_shows_error() {
    let root = fixture(
        "linker-failure",
        r#"<div class="entity-links">
             <input type="checkbox" data-url="/biovision-missing/link">
           </div>"#,
    );
    EntityLinker.initialize(&ctx()).unwrap();

    let input: HtmlInputElement = dom::query_in(&root, "input", "checkbox").unwrap();
    input.click();
    assert!(input.checked());
    assert!(input.disabled());

    assert!(wait_until(|| !input.disabled()).await);
    assert!(!input.checked());
    assert!(error_shown());

    root.remove();
}

#[wasm_bindgen_test]
async fn test_user_search_allows_one_request_at_a_time() {
    let root = fixture(
        "search-guard",
        r#"<div class="js-admin-user-search" data-url="/biovision-missing/search">
             <input type="search" value="ann">
             <button>Find</button>
             <select></select>
           </div>"#,
    );
    let callbacks: SharedCallbacks = Rc::new(RefCell::new(CallbackRegistry::new()));
    AdminUserSearch::new(callbacks).initialize(&ctx()).unwrap();

    let button: HtmlButtonElement = dom::query_in(&root, "button", "button").unwrap();
    button.click();
    assert!(button.disabled());

    assert!(wait_until(|| !button.disabled()).await);
    assert!(error_shown());

    root.remove();
}

#[wasm_bindgen_test]
async fn test_add_user_refuses_overlapping_requests() {
    let root = fixture(
        "privilege-guard",
        r#"<ul class="js-component-added-users" data-url="/biovision-missing/privilege"></ul>"#,
    );
    let callbacks: SharedCallbacks = Rc::new(RefCell::new(CallbackRegistry::new()));
    UserPrivilege::new(callbacks.clone()).initialize(&ctx()).unwrap();

    let add = |id: u64| callbacks.borrow().execute(ADD_USER_CALLBACK, &[json!(id)]);
    assert!(add(5).is_ok());
    assert!(matches!(add(5), Err(CallbackError::Failed(_))));

    // the failed PATCH releases the guard
    assert!(wait_until(error_shown).await);
    hide_error();
    assert!(add(6).is_ok());
    assert!(wait_until(error_shown).await);

    root.remove();
}

#[wasm_bindgen_test]
async fn test_form_body_reaches_failure_handler() {
    let status: Rc<RefCell<Option<u16>>> = Rc::default();
    let seen = status.clone();
    let handlers = Handlers::new("/biovision-missing/upload").on_failure(move |error| {
        if let RequestError::Status { status, .. } = error {
            *seen.borrow_mut() = Some(*status);
        }
    });

    let spec = ctx().new_request(Method::Post, "/biovision-missing/upload");
    let request = AjaxRequest::open(&spec, handlers).unwrap();
    let form = FormData::new().unwrap();
    form.append_with_str("image[title]", "cover").unwrap();
    request.send_form(&form).unwrap();

    assert!(wait_until(|| status.borrow().is_some()).await);
    assert!(status.borrow().map_or(false, |code| code >= 400));
}
