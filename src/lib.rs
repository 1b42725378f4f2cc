//! # Service Registry
//!
//! A thread-safe service locator: each type maps to at most one shared instance.
//!
//! Unrelated parts of an application can share collaborators such as a logger or a
//! connection pool without threading references through every call site.
//! Registration is strictly additive, lookups return the registered `Arc` itself, and
//! every operation is serialized behind a single lock.
//!
//! ## Quick Start
//!
//! ```rust
//! use service_registry::{Registry, RegistryError, TypeKey};
//! use std::sync::Arc;
//!
//! let registry = Registry::new();
//! registry.register("Hello, World!".to_string())?;
//!
//! let message: Arc<String> = registry.get()?;
//! assert_eq!(&*message, "Hello, World!");
//!
//! // A second registration for the same type is rejected.
//! assert_eq!(
//!     registry.register("again".to_string()),
//!     Err(RegistryError::AlreadyRegistered { key: TypeKey::of::<String>() })
//! );
//!
//! registry.remove::<String>()?;
//! assert!(!registry.contains::<String>());
//! # Ok::<(), RegistryError>(())
//! ```
//!
//! ## Process-wide registry
//!
//! [`global`] holds a registry shared by the whole process. Further isolated static
//! registries are declared with [`define_registry!`].
//!
//! ```rust
//! use service_registry::global;
//!
//! global::register(8080u16).unwrap();
//! assert_eq!(*global::get::<u16>().unwrap(), 8080);
//! # global::clear();
//! ```
//!
//! ## Main Types
//!
//! - [`Registry`] - the store and its operations
//! - [`TypeKey`] - identity of a registered service
//! - [`RegistryError`] - `NotRegistered` / `AlreadyRegistered`
//! - [`RegistryEvent`] - events passed to the trace callback
//!
//! ## Features
//!
//! - `tracing` (default): emit every registry event as a `tracing` record at trace level

#[macro_use]
mod macros;
mod registry;
mod registry_error;
mod registry_event;
mod type_key;

pub use registry::{Registry, TraceCallback};
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use type_key::TypeKey;

define_registry!(
    /// The process-wide registry, created empty on first use.
    global
);
