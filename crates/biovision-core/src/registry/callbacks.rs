//! Named callbacks
//!
//! Server-rendered markup sometimes names a callback instead of holding a
//! reference to it, e.g. `data-callback="userPrivilege.addUser"`. Instead of
//! walking object properties at call time, components register their
//! callbacks here under validated dotted names and markup-driven code
//! dispatches through [`CallbackRegistry::execute`].

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;
use tracing::debug;

use crate::error::CallbackError;

/// A registered callback
pub type Callback = Rc<dyn Fn(&[Value]) -> Result<(), CallbackError>>;

/// Mapping from dotted callback names to callables
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: BTreeMap<String, Callback>,
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.callbacks.keys()).finish()
    }
}

fn validate_name(name: &str) -> Result<(), CallbackError> {
    let valid = !name.is_empty()
        && name.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        });
    if valid {
        Ok(())
    } else {
        Err(CallbackError::InvalidName(name.to_string()))
    }
}

impl CallbackRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; the name is validated and must be unused
    pub fn register<F>(&mut self, name: &str, callback: F) -> Result<(), CallbackError>
    where
        F: Fn(&[Value]) -> Result<(), CallbackError> + 'static,
    {
        validate_name(name)?;
        if self.callbacks.contains_key(name) {
            return Err(CallbackError::Duplicate(name.to_string()));
        }
        self.callbacks.insert(name.to_string(), Rc::new(callback));
        debug!(callback = name, "registered");
        Ok(())
    }

    /// Look up a callback by name
    pub fn get(&self, name: &str) -> Option<Callback> {
        self.callbacks.get(name).cloned()
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.callbacks.contains_key(name)
    }

    /// Invoke the callback registered under `name`
    pub fn execute(&self, name: &str, args: &[Value]) -> Result<(), CallbackError> {
        let callback = self
            .callbacks
            .get(name)
            .ok_or_else(|| CallbackError::Unknown(name.to_string()))?;
        callback(args)
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.callbacks.keys().map(String::as_str)
    }
}

/// Read the first argument as a positive integer id
pub fn id_argument(name: &str, args: &[Value]) -> Result<u64, CallbackError> {
    let bad = |reason| CallbackError::BadArguments {
        name: name.to_string(),
        reason,
    };
    match args.first() {
        Some(Value::Number(n)) => n
            .as_u64()
            .filter(|id| *id > 0)
            .ok_or_else(|| bad("id must be a positive integer")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| bad("id must be a positive integer")),
        Some(_) => Err(bad("id must be a number or numeric string")),
        None => Err(bad("missing id argument")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_register_and_execute() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut callbacks = CallbackRegistry::new();
        let sink = seen.clone();
        callbacks
            .register("userPrivilege.addUser", move |args| {
                sink.borrow_mut().push(id_argument("userPrivilege.addUser", args)?);
                Ok(())
            })
            .unwrap();

        callbacks
            .execute("userPrivilege.addUser", &[json!(42)])
            .unwrap();
        callbacks
            .execute("userPrivilege.addUser", &[json!("7")])
            .unwrap();

        assert_eq!(*seen.borrow(), vec![42, 7]);
        assert!(callbacks.contains("userPrivilege.addUser"));
    }

    #[test]
    fn test_names_are_validated_at_registration() {
        let mut callbacks = CallbackRegistry::new();

        for name in ["", "a..b", ".a", "a.", "a b", "a.b()"] {
            assert_eq!(
                callbacks.register(name, |_| Ok(())),
                Err(CallbackError::InvalidName(name.to_string())),
                "{:?} should be rejected",
                name
            );
        }
        assert!(callbacks.register("forms.showErrors", |_| Ok(())).is_ok());
        assert_eq!(
            callbacks.register("forms.showErrors", |_| Ok(())),
            Err(CallbackError::Duplicate("forms.showErrors".to_string()))
        );
    }

    #[test]
    fn test_unknown_callback() {
        let callbacks = CallbackRegistry::new();
        assert_eq!(
            callbacks.execute("missing.fn", &[]),
            Err(CallbackError::Unknown("missing.fn".to_string()))
        );
    }

    #[test]
    fn test_id_argument_rejects_bad_input() {
        assert!(id_argument("f", &[]).is_err());
        assert!(id_argument("f", &[json!(0)]).is_err());
        assert!(id_argument("f", &[json!(-3)]).is_err());
        assert!(id_argument("f", &[json!({"id": 1})]).is_err());
        assert_eq!(id_argument("f", &[json!(" 12 ")]), Ok(12));
    }
}
