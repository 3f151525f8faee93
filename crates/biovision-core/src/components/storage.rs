//! Web storage with an availability probe
//!
//! Browsers may expose `localStorage` and still throw on every write
//! (private mode, quota, disabled cookies). Each operation first writes and
//! removes [`PROBE_KEY`]; if that fails the operation is refused with
//! [`StorageError::Unavailable`].

use std::fmt;

use tracing::warn;

use crate::error::StorageError;

/// Key written and removed by the availability probe
pub const PROBE_KEY: &str = "__storage_test__";

/// Which browser storage area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Local,
    Session,
}

impl StorageKind {
    /// Parse the short area name used by callers (`"local"`, `"session"`)
    pub fn from_area(area: &str) -> Option<Self> {
        match area {
            "local" => Some(Self::Local),
            "session" => Some(Self::Session),
            _ => None,
        }
    }

    /// Property name on `window`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string key-value storage area
pub trait StorageBackend {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// A storage area that may be missing or refuse access
#[derive(Debug)]
pub struct Store<B> {
    kind: StorageKind,
    backend: Option<B>,
}

impl<B: StorageBackend> Store<B> {
    /// `backend` is `None` when the browser does not expose the area at all
    pub fn new(kind: StorageKind, backend: Option<B>) -> Self {
        Self { kind, backend }
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    /// Whether a probe value can be written and removed
    pub fn available(&self) -> bool {
        self.backend.as_ref().is_some_and(|backend| {
            backend.set_item(PROBE_KEY, PROBE_KEY).is_ok()
                && backend.remove_item(PROBE_KEY).is_ok()
        })
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.checked("set")?.set_item(key, value)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.checked("get")?.get_item(key)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.checked("remove")?.remove_item(key)
    }

    fn checked(&self, operation: &'static str) -> Result<&B, StorageError> {
        match &self.backend {
            Some(backend) if self.available() => Ok(backend),
            _ => {
                warn!(storage = %self.kind, operation, "storage is not available");
                Err(StorageError::Unavailable(self.kind.as_str()))
            }
        }
    }
}
