//! Form helpers called back by server responses

use biovision_core::components::forms::{
    FormErrors, SwitchElements, ERRORS_SELECTOR, SHOW_ERRORS_CALLBACK, SWITCH_ELEMENTS_CALLBACK,
};
use biovision_core::{AppContext, CallbackError, Component, ComponentError};
use web_sys::{Document, Element};

use super::SharedCallbacks;
use crate::dom::{self, js_error};

/// Registers `forms.showErrors` and `forms.switchElements`
pub struct Forms {
    callbacks: SharedCallbacks,
}

impl Forms {
    pub fn new(callbacks: SharedCallbacks) -> Self {
        Self { callbacks }
    }
}

impl Component for Forms {
    fn initialize(&mut self, _ctx: &AppContext) -> Result<(), ComponentError> {
        let mut callbacks = self.callbacks.borrow_mut();
        callbacks.register(SHOW_ERRORS_CALLBACK, |args| {
            let errors = FormErrors::from_args(args)?;
            show_errors(&dom_document()?, &errors)
        })?;
        callbacks.register(SWITCH_ELEMENTS_CALLBACK, |args| {
            let switch = SwitchElements::from_args(args)?;
            switch_elements(&dom_document()?, &switch)
        })?;
        Ok(())
    }
}

fn dom_document() -> Result<Document, CallbackError> {
    dom::document().map_err(|e| CallbackError::Failed(e.to_string()))
}

fn failed(error: wasm_bindgen::JsValue) -> CallbackError {
    CallbackError::Failed(js_error(&error))
}

fn find_form(document: &Document, id: &str) -> Result<Element, CallbackError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| CallbackError::Failed(format!("no element #{}", id)))
}

/// Replace the form's error list with `errors` and scroll to it
pub fn show_errors(document: &Document, errors: &FormErrors) -> Result<(), CallbackError> {
    let form = find_form(document, &errors.form_id)?;
    let list = match form.query_selector(ERRORS_SELECTOR).map_err(failed)? {
        Some(list) => list,
        None => {
            let list = document.create_element("ol").map_err(failed)?;
            list.class_list().add_1("errors").map_err(failed)?;
            list
        }
    };

    list.set_inner_html("");
    for message in &errors.messages {
        let item = document.create_element("li").map_err(failed)?;
        item.set_text_content(Some(message));
        list.append_child(&item).map_err(failed)?;
    }
    form.prepend_with_node_1(&list).map_err(failed)?;
    list.scroll_into_view();
    Ok(())
}

/// Hide and show children of a form by selector
pub fn switch_elements(document: &Document, switch: &SwitchElements) -> Result<(), CallbackError> {
    let form = find_form(document, &switch.form_id)?;
    let lookup = |selector: &str| {
        dom::query_all_in::<Element>(&form, selector)
            .map_err(|e| CallbackError::Failed(e.to_string()))
    };
    let show = lookup(&switch.show)?;
    let hide = lookup(&switch.hide)?;
    for element in show {
        element.class_list().remove_1("hidden").map_err(failed)?;
    }
    for element in hide {
        element.class_list().add_1("hidden").map_err(failed)?;
    }
    Ok(())
}
