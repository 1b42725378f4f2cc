use thiserror::Error;

use crate::TypeKey;

/// Failures reported by registry operations.
///
/// Each variant names the exact key involved so a misconfigured registry can be
/// diagnosed from the error alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No instance is registered under the key (`get`, `get_cloned`, `remove`).
    #[error("Type not registered: {key}")]
    NotRegistered { key: TypeKey },

    /// An instance is already registered under the key (`register`, `register_arc`).
    #[error("Type already registered: {key}")]
    AlreadyRegistered { key: TypeKey },
}

impl RegistryError {
    /// The key the failed operation was called with.
    pub fn key(&self) -> TypeKey {
        match self {
            RegistryError::NotRegistered { key } | RegistryError::AlreadyRegistered { key } => {
                *key
            }
        }
    }
}
