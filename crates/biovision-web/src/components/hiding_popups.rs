//! Popups closed by clicking elsewhere

use biovision_core::components::{controls_to_close, popups};
use biovision_core::{AppContext, Component, ComponentError};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom;

pub struct HidingPopups;

impl Component for HidingPopups {
    fn initialize(&mut self, _ctx: &AppContext) -> Result<(), ComponentError> {
        let document = dom::document()?;
        let controls: Vec<HtmlInputElement> = dom::query_all(&document, popups::CONTROL_SELECTOR)?;
        if controls.is_empty() {
            return Err(ComponentError::Skipped);
        }

        dom::listen(&document, "click", move |event: Event| {
            let clicked = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(popups::CONTAINER_SELECTOR).ok().flatten())
                .and_then(|container| container.query_selector(".popup-control").ok().flatten())
                .and_then(|control| {
                    controls
                        .iter()
                        .position(|candidate| AsRef::<Element>::as_ref(candidate) == &control)
                });

            for index in controls_to_close(controls.len(), clicked) {
                controls[index].set_checked(false);
            }
        })
    }
}
