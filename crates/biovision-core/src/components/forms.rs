//! Form error lists and element switching
//!
//! Server responses to remotely submitted forms call back into the page
//! with `forms.showErrors(model, errors)`. `errors` is either a list of
//! messages or the field → messages object Rails renders for a model.

use serde_json::Value;

use crate::error::CallbackError;

/// Callback rendering an error list into a model's form
pub const SHOW_ERRORS_CALLBACK: &str = "forms.showErrors";

/// Callback toggling `hidden` on form children
pub const SWITCH_ELEMENTS_CALLBACK: &str = "forms.switchElements";

/// Error list element inside a form
pub const ERRORS_SELECTOR: &str = "ol.errors";

/// Id of the form for `model`, e.g. `post-form`
pub fn form_id(model: &str) -> String {
    format!("{}-form", model)
}

/// Flatten an errors value into display messages
///
/// Object entries become `field: message`, one per message, in field order.
pub fn error_messages(errors: &Value) -> Vec<String> {
    fn texts(value: &Value) -> Vec<String> {
        match value {
            Value::String(text) => vec![text.clone()],
            Value::Array(list) => list
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    match errors {
        Value::Object(fields) => fields
            .iter()
            .flat_map(|(field, messages)| {
                texts(messages)
                    .into_iter()
                    .map(move |message| format!("{}: {}", field, message))
            })
            .collect(),
        other => texts(other),
    }
}

/// Arguments of [`SHOW_ERRORS_CALLBACK`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub form_id: String,
    pub messages: Vec<String>,
}

impl FormErrors {
    pub fn from_args(args: &[Value]) -> Result<Self, CallbackError> {
        let bad = |reason| CallbackError::BadArguments {
            name: SHOW_ERRORS_CALLBACK.to_string(),
            reason,
        };
        let model = args
            .first()
            .and_then(Value::as_str)
            .filter(|model| !model.is_empty())
            .ok_or_else(|| bad("model name must be a non-empty string"))?;
        let errors = args.get(1).ok_or_else(|| bad("missing error list"))?;

        Ok(Self {
            form_id: form_id(model),
            messages: error_messages(errors),
        })
    }
}

/// Arguments of [`SWITCH_ELEMENTS_CALLBACK`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchElements {
    pub form_id: String,
    pub hide: String,
    pub show: String,
}

impl SwitchElements {
    pub fn from_args(args: &[Value]) -> Result<Self, CallbackError> {
        let text = |index: usize| {
            args.get(index)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| CallbackError::BadArguments {
                    name: SWITCH_ELEMENTS_CALLBACK.to_string(),
                    reason: "expected form id, hide selector and show selector",
                })
        };
        Ok(Self {
            form_id: text(0)?,
            hide: text(1)?,
            show: text(2)?,
        })
    }
}
