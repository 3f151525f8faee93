//! Component registry
//!
//! Entries are registered once when the page starts and never removed.
//! The registry, not the component, records whether an entry was
//! initialized, so `init` can run any number of times.

use tracing::{debug, warn};

use super::Component;
use crate::context::AppContext;
use crate::error::{ComponentError, RegistryError};

/// A registered component and its nested children
struct Entry {
    id: String,
    component: Box<dyn Component>,
    initialized: bool,
    auto_init_children: bool,
    children: Vec<Entry>,
}

impl Entry {
    fn build(id: String, mut component: Box<dyn Component>) -> Result<Self, RegistryError> {
        let mut children: Vec<Entry> = Vec::new();
        for (child_id, child) in component.children() {
            if children.iter().any(|entry| entry.id == child_id) {
                return Err(RegistryError::DuplicateComponent(format!(
                    "{}.{}",
                    id, child_id
                )));
            }
            children.push(Self::build(child_id, child)?);
        }

        Ok(Self {
            auto_init_children: component.auto_init_children(),
            id,
            component,
            initialized: false,
            children,
        })
    }

    /// Initialize this entry if needed; returns true if it ran successfully now
    fn init_self(&mut self, ctx: &AppContext, path: &str) -> bool {
        if self.initialized {
            return false;
        }

        match self.component.initialize(ctx) {
            Ok(()) => {
                self.initialized = true;
                debug!(component = path, "initialized");
                true
            }
            Err(ComponentError::Skipped) => {
                debug!(component = path, "not present on this page");
                false
            }
            Err(error) => {
                warn!(component = path, %error, "initialization failed");
                false
            }
        }
    }

    /// Initialize children not yet initialized, descending into children
    /// that auto-init their own
    fn init_children(&mut self, ctx: &AppContext, path: &str) -> usize {
        let mut count = 0;
        for child in &mut self.children {
            let child_path = format!("{}.{}", path, child.id);
            if child.init_self(ctx, &child_path) {
                count += 1;
            }
            if child.auto_init_children {
                count += child.init_children(ctx, &child_path);
            }
        }
        count
    }

    fn find(&self, path: &[&str]) -> Option<&Entry> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self
                .children
                .iter()
                .find(|child| child.id == *head)
                .and_then(|child| child.find(rest)),
        }
    }

    fn find_mut(&mut self, path: &[&str]) -> Option<&mut Entry> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self
                .children
                .iter_mut()
                .find(|child| child.id == *head)
                .and_then(|child| child.find_mut(rest)),
        }
    }
}

/// Owns the page's components and initializes each exactly once
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("components", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level component under a unique id
    pub fn register(
        &mut self,
        id: impl Into<String>,
        component: Box<dyn Component>,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.entries.iter().any(|entry| entry.id == id) {
            return Err(RegistryError::DuplicateComponent(id));
        }
        self.entries.push(Entry::build(id, component)?);
        Ok(())
    }

    /// Initialize every component that is not initialized yet
    ///
    /// Runs in registration order. Children of components that opt into
    /// auto-init are initialized right after their parent. Returns the
    /// number of components initialized by this call.
    pub fn init(&mut self, ctx: &AppContext) -> usize {
        let mut count = 0;
        for entry in &mut self.entries {
            let path = entry.id.clone();
            if entry.init_self(ctx, &path) {
                count += 1;
            }
            if entry.auto_init_children {
                count += entry.init_children(ctx, &path);
            }
        }
        debug!(count, "registry init pass complete");
        count
    }

    /// Initialize the children of the component at `path` (dot-separated)
    pub fn init_children(&mut self, path: &str, ctx: &AppContext) -> Result<usize, RegistryError> {
        let segments: Vec<&str> = path.split('.').collect();
        let (head, rest) = segments
            .split_first()
            .ok_or_else(|| RegistryError::UnknownComponent(path.to_string()))?;
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == *head)
            .and_then(|entry| entry.find_mut(rest))
            .ok_or_else(|| RegistryError::UnknownComponent(path.to_string()))?;
        Ok(entry.init_children(ctx, path))
    }

    /// Whether the component at `path` (dot-separated) is initialized
    pub fn is_initialized(&self, path: &str) -> Result<bool, RegistryError> {
        let segments: Vec<&str> = path.split('.').collect();
        segments
            .split_first()
            .and_then(|(head, rest)| {
                self.entries
                    .iter()
                    .find(|entry| entry.id == *head)
                    .and_then(|entry| entry.find(rest))
            })
            .map(|entry| entry.initialized)
            .ok_or_else(|| RegistryError::UnknownComponent(path.to_string()))
    }

    /// Top-level ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    /// Number of top-level components
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts initialize calls; optionally absent from the page
    struct Probe {
        calls: Rc<Cell<u32>>,
        present: bool,
        children: Vec<(String, Box<dyn Component>)>,
        auto_init: bool,
    }

    impl Probe {
        fn new(calls: &Rc<Cell<u32>>) -> Self {
            Self {
                calls: calls.clone(),
                present: true,
                children: Vec::new(),
                auto_init: false,
            }
        }

        fn absent(mut self) -> Self {
            self.present = false;
            self
        }

        fn with_child(mut self, id: &str, child: Probe) -> Self {
            self.children.push((id.to_string(), Box::new(child)));
            self
        }

        fn auto_init(mut self) -> Self {
            self.auto_init = true;
            self
        }
    }

    impl Component for Probe {
        fn initialize(&mut self, _ctx: &AppContext) -> Result<(), ComponentError> {
            self.calls.set(self.calls.get() + 1);
            if self.present {
                Ok(())
            } else {
                Err(ComponentError::Skipped)
            }
        }

        fn children(&mut self) -> Vec<(String, Box<dyn Component>)> {
            std::mem::take(&mut self.children)
        }

        fn auto_init_children(&self) -> bool {
            self.auto_init
        }
    }

    fn ctx() -> AppContext {
        AppContext::new("en", "token")
    }

    #[test]
    fn test_init_twice_initializes_once() {
        let calls = Rc::new(Cell::new(0));
        let mut registry = Registry::new();
        registry.register("a", Box::new(Probe::new(&calls))).unwrap();
        registry.register("b", Box::new(Probe::new(&calls))).unwrap();

        assert_eq!(registry.init(&ctx()), 2);
        assert_eq!(registry.init(&ctx()), 0);
        assert_eq!(calls.get(), 2);
        assert_eq!(registry.is_initialized("a"), Ok(true));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let calls = Rc::new(Cell::new(0));
        let mut registry = Registry::new();
        registry.register("a", Box::new(Probe::new(&calls))).unwrap();

        assert_eq!(
            registry.register("a", Box::new(Probe::new(&calls))),
            Err(RegistryError::DuplicateComponent("a".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_skipped_component_stays_uninitialized() {
        let calls = Rc::new(Cell::new(0));
        let mut registry = Registry::new();
        registry
            .register("missing", Box::new(Probe::new(&calls).absent()))
            .unwrap();

        assert_eq!(registry.init(&ctx()), 0);
        assert_eq!(registry.is_initialized("missing"), Ok(false));
    }

    #[test]
    fn test_auto_init_children() {
        let calls = Rc::new(Cell::new(0));
        let parent = Probe::new(&calls)
            .with_child("one", Probe::new(&calls))
            .with_child("two", Probe::new(&calls))
            .auto_init();

        let mut registry = Registry::new();
        registry.register("parent", Box::new(parent)).unwrap();

        assert_eq!(registry.init(&ctx()), 3);
        assert_eq!(registry.is_initialized("parent.two"), Ok(true));

        assert_eq!(registry.init(&ctx()), 0);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_children_without_auto_init_wait_for_explicit_call() {
        let calls = Rc::new(Cell::new(0));
        let parent = Probe::new(&calls).with_child("lazy", Probe::new(&calls));

        let mut registry = Registry::new();
        registry.register("parent", Box::new(parent)).unwrap();

        assert_eq!(registry.init(&ctx()), 1);
        assert_eq!(registry.is_initialized("parent.lazy"), Ok(false));

        assert_eq!(registry.init_children("parent", &ctx()), Ok(1));
        assert_eq!(registry.init_children("parent", &ctx()), Ok(0));
        assert_eq!(registry.is_initialized("parent.lazy"), Ok(true));
    }

    #[test]
    fn test_unknown_paths() {
        let registry = Registry::new();
        assert_eq!(
            registry.is_initialized("nope.child"),
            Err(RegistryError::UnknownComponent("nope.child".to_string()))
        );
    }

    #[test]
    fn test_duplicate_child_ids_rejected() {
        let calls = Rc::new(Cell::new(0));
        let parent = Probe::new(&calls)
            .with_child("same", Probe::new(&calls))
            .with_child("same", Probe::new(&calls));

        let mut registry = Registry::new();
        assert_eq!(
            registry.register("parent", Box::new(parent)),
            Err(RegistryError::DuplicateComponent("parent.same".to_string()))
        );
    }
}
