//! Checkboxes linking two entities
//!
//! Checking a box PUTs its `data-url`, unchecking DELETEs it. The box stays
//! disabled while the request is in flight and flips back if it fails.

use biovision_core::components::{link_method, linker};
use biovision_core::{AppContext, Component, ComponentError, Handlers, RequestError, RequestGuard};
use tracing::debug;
use web_sys::{Event, HtmlInputElement};

use crate::{dom, request};

pub struct EntityLinker;

impl Component for EntityLinker {
    fn initialize(&mut self, ctx: &AppContext) -> Result<(), ComponentError> {
        let document = dom::document()?;
        let boxes: Vec<HtmlInputElement> = dom::query_all(&document, linker::SELECTOR)?;
        if boxes.is_empty() {
            return Err(ComponentError::Skipped);
        }

        for input in boxes {
            let ctx = ctx.clone();
            let guard = RequestGuard::new();
            let target = input.clone();
            dom::listen(&target, "click", move |_: Event| toggle(&ctx, &input, &guard))?;
        }
        Ok(())
    }
}

fn toggle(ctx: &AppContext, input: &HtmlInputElement, guard: &RequestGuard) {
    let url = match input.get_attribute("data-url") {
        Some(url) if !url.is_empty() => url,
        _ => return,
    };
    if input.disabled() || !guard.try_begin() {
        return;
    }

    // the click already toggled the box
    let checked = input.checked();
    let method = link_method(checked);
    debug!(%method, %url, "updating link");
    input.set_disabled(true);

    let release = {
        let input = input.clone();
        let guard = guard.clone();
        move || {
            input.set_disabled(false);
            guard.finish();
        }
    };
    let on_failure = {
        let release = release.clone();
        let input = input.clone();
        move |error: &RequestError| {
            input.set_checked(!checked);
            release();
            request::report_handled(error);
        }
    };
    let handlers = Handlers::new(url.as_str())
        .on_success(move |_| release())
        .on_failure(on_failure);

    let spec = ctx.new_request(method, url.as_str());
    if !request::send(&spec, handlers, None) {
        input.set_checked(!checked);
        input.set_disabled(false);
        guard.finish();
    }
}
