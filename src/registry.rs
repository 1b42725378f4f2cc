//! The registry: one shared instance per type, behind a single lock.
//!
//! # Examples
//!
//! ```
//! use service_registry::{Registry, RegistryError};
//! use std::sync::Arc;
//!
//! let registry = Registry::new();
//! registry.register("Hello, World!".to_string())?;
//!
//! let message: Arc<String> = registry.get()?;
//! assert_eq!(&*message, "Hello, World!");
//! # Ok::<(), RegistryError>(())
//! ```

use std::{
    any::Any,
    collections::{hash_map::Entry, HashMap},
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{RegistryError, RegistryEvent, TypeKey};

/// Type-erased storage. Each value is the `Arc<T>` registered under `TypeKey::of::<T>()`.
type Store = HashMap<TypeKey, Box<dyn Any + Send + Sync>>;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the registry is
/// interacted with. It must be thread-safe because the registry itself is shared.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Thread-safe map from a type to the single shared instance registered for it.
///
/// Every operation takes the same mutex for its whole duration, so operations are
/// serialized one at a time, reads included. Registration never overwrites and
/// removal of an absent type is an error.
///
/// A `Registry` is a plain value: build one with [`Registry::new`] and share it by
/// reference, or use [`define_registry!`](crate::define_registry) for a static one.
pub struct Registry {
    store: Mutex<Store>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl Registry {
    /// Creates an empty registry with no trace callback.
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            trace: Mutex::new(None),
        }
    }

    // Every mutation is a single map call, so a poisoned map is never torn.
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Sets a tracing callback that will be invoked on every registry interaction.
    ///
    /// The callback runs after the store lock is released, so it may use the
    /// registry itself. It replaces any previously set callback.
    ///
    /// # Example
    /// ```rust
    /// use service_registry::Registry;
    ///
    /// let registry = Registry::new();
    /// registry.set_trace_callback(|event| println!("[registry-trace] {}", event));
    /// ```
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = self.trace.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(callback));
    }

    /// Clears the tracing callback. Registered values are not affected.
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    fn emit_event(&self, event: RegistryEvent) {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "service_registry", event = %event, "registry operation");

        // Cloned out so the callback runs without holding the trace lock.
        let callback = self
            .trace
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(callback) = callback {
            callback(&event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Registers a value under its own type.
    ///
    /// Takes ownership of the value and wraps it in an `Arc` automatically.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyRegistered`] if a value of type `T` is already
    /// registered. The existing value is left in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use service_registry::{Registry, RegistryError, TypeKey};
    ///
    /// let registry = Registry::new();
    /// registry.register(42i32).unwrap();
    ///
    /// assert_eq!(
    ///     registry.register(7i32),
    ///     Err(RegistryError::AlreadyRegistered { key: TypeKey::of::<i32>() })
    /// );
    /// assert_eq!(*registry.get::<i32>().unwrap(), 42);
    /// ```
    pub fn register<T: Send + Sync + 'static>(&self, value: T) -> Result<(), RegistryError> {
        self.register_arc(Arc::new(value))
    }

    /// Registers an `Arc` under the key of `T`.
    ///
    /// Unlike [`register`](Self::register), `T` may be unsized. Naming a trait object
    /// as `T` registers a concrete implementation under the identity of the trait, so
    /// it is later found with `get::<dyn Trait>()`. Auto-trait bounds written on the
    /// key are part of its identity: `dyn Trait + Send + Sync` is a different key from
    /// `dyn Trait`, so register and look up with the same spelling.
    ///
    /// ```
    /// use service_registry::Registry;
    /// use std::sync::Arc;
    ///
    /// trait Greeter: Send + Sync {
    ///     fn greet(&self) -> String;
    /// }
    ///
    /// struct English;
    ///
    /// impl Greeter for English {
    ///     fn greet(&self) -> String {
    ///         "hello".to_string()
    ///     }
    /// }
    ///
    /// let registry = Registry::new();
    /// registry.register_arc::<dyn Greeter>(Arc::new(English)).unwrap();
    ///
    /// let greeter = registry.get::<dyn Greeter>().unwrap();
    /// assert_eq!(greeter.greet(), "hello");
    /// assert!(!registry.contains::<English>());
    /// ```
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyRegistered`] if the key of `T` is taken.
    pub fn register_arc<T: ?Sized + Send + Sync + 'static>(
        &self,
        value: Arc<T>,
    ) -> Result<(), RegistryError> {
        let key = TypeKey::of::<T>();

        let result = match self.store().entry(key) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyRegistered { key }),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(value));
                Ok(())
            }
        };

        self.emit_event(RegistryEvent::Register {
            type_name: key.name(),
            accepted: result.is_ok(),
        });

        result
    }

    /// Retrieves the instance registered for `T`.
    ///
    /// The returned `Arc` points at the registered allocation; nothing is copied.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotRegistered`] if nothing is registered for `T`.
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>, RegistryError> {
        let key = TypeKey::of::<T>();

        let found = self
            .store()
            .get(&key)
            .and_then(|entry| entry.downcast_ref::<Arc<T>>())
            .cloned();

        self.emit_event(RegistryEvent::Get {
            type_name: key.name(),
            found: found.is_some(),
        });

        found.ok_or(RegistryError::NotRegistered { key })
    }

    /// Retrieves an owned clone of the value registered for `T`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotRegistered`] if nothing is registered for `T`.
    pub fn get_cloned<T: Clone + Send + Sync + 'static>(&self) -> Result<T, RegistryError> {
        let arc = self.get::<T>()?;
        Ok((*arc).clone())
    }

    /// Checks whether an instance is registered for `T`.
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let key = TypeKey::of::<T>();
        let found = self.store().contains_key(&key);

        self.emit_event(RegistryEvent::Contains {
            type_name: key.name(),
            found,
        });

        found
    }

    /// Removes the instance registered for `T` and hands it back.
    ///
    /// The registry performs no cleanup of its own; dropping the returned `Arc`
    /// releases the registry's reference.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotRegistered`] if nothing is registered for `T`. The
    /// store is left unchanged.
    pub fn remove<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>, RegistryError> {
        let key = TypeKey::of::<T>();

        let removed = self
            .store()
            .remove(&key)
            .and_then(|entry| entry.downcast::<Arc<T>>().ok())
            .map(|boxed| *boxed);

        self.emit_event(RegistryEvent::Remove {
            type_name: key.name(),
            found: removed.is_some(),
        });

        removed.ok_or(RegistryError::NotRegistered { key })
    }

    /// Removes every registered instance. Succeeds on an empty registry too.
    ///
    /// Already-retrieved `Arc<T>` handles stay valid, and the tracing callback is
    /// kept.
    pub fn clear(&self) {
        // Entries are dropped after the lock is released.
        let drained = std::mem::take(&mut *self.store());

        self.emit_event(RegistryEvent::Clear {
            removed: drained.len(),
        });
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
