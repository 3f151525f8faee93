//! "Go to top" link shown after scrolling down

use biovision_core::components::{is_inactive, top_link};
use biovision_core::{AppContext, Component, ComponentError};
use tracing::warn;
use web_sys::{Element, Event, Window};

use crate::dom::{self, js_error};

pub struct TopLinker;

fn update(window: &Window, link: &Element) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let classes = link.class_list();
    let result = if is_inactive(scroll_y) {
        classes.add_1(top_link::INACTIVE_CLASS)
    } else {
        classes.remove_1(top_link::INACTIVE_CLASS)
    };
    if let Err(e) = result {
        warn!(error = %js_error(&e), "could not toggle top link");
    }
}

impl Component for TopLinker {
    fn initialize(&mut self, _ctx: &AppContext) -> Result<(), ComponentError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let link = document
            .get_element_by_id(top_link::ELEMENT_ID)
            .ok_or(ComponentError::Skipped)?;

        update(&window, &link);
        let target = window.clone();
        dom::listen(&target, "scroll", move |_: Event| update(&window, &link))
    }
}
