//! Delete buttons
//!
//! Two markups are supported, see [`DestroyTarget`]. A successful DELETE
//! removes the owning element from the page.

use biovision_core::components::DestroyTarget;
use biovision_core::{AppContext, Component, ComponentError, Handlers, Method};
use tracing::warn;
use web_sys::{Element, Event, HtmlButtonElement};

use crate::{dom, request};

pub struct DestroyButton;

impl Component for DestroyButton {
    fn initialize(&mut self, ctx: &AppContext) -> Result<(), ComponentError> {
        let document = dom::document()?;
        let mut bound = 0;

        for target in DestroyTarget::ALL {
            let buttons: Vec<HtmlButtonElement> =
                dom::query_all(&document, target.button_selector())?;
            for button in buttons {
                let ctx = ctx.clone();
                let element = button.clone();
                dom::listen(&element, "click", move |_: Event| {
                    destroy(&ctx, target, &button);
                })?;
                bound += 1;
            }
        }

        if bound == 0 {
            return Err(ComponentError::Skipped);
        }
        Ok(())
    }
}

fn destroy(ctx: &AppContext, target: DestroyTarget, button: &HtmlButtonElement) {
    if button.disabled() {
        return;
    }

    let removed: Option<Element> = button.closest(target.removed_selector()).ok().flatten();
    let attrs = match target {
        DestroyTarget::Container => removed.as_ref().map(dom::data_attributes),
        DestroyTarget::ListItem => Some(dom::data_attributes(button)),
    };
    let url = match attrs.as_ref().map(|attrs| target.url(attrs)) {
        Some(Ok(url)) => url.to_string(),
        Some(Err(error)) => {
            warn!(%error, "delete button misconfigured");
            return;
        }
        None => {
            warn!(selector = target.removed_selector(), "delete button outside its container");
            return;
        }
    };

    if target.confirms() {
        let confirmed = dom::window()
            .ok()
            .and_then(|window| window.confirm_with_message(ctx.confirmation_prompt()).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
    }

    button.set_disabled(true);
    let enable = button.clone();
    let handlers = Handlers::new(url.as_str())
        .on_success(move |_| {
            if let Some(element) = removed {
                element.remove();
            }
        })
        .on_failure(move |error| {
            enable.set_disabled(false);
            request::report_handled(error);
        });

    let spec = ctx.new_request(Method::Delete, url.as_str());
    if !request::send(&spec, handlers, None) {
        button.set_disabled(false);
    }
}
