//! Macro for declaring static, process-wide registries.

/// Declares a module holding a process-wide [`Registry`](crate::Registry).
///
/// The macro generates `pub mod $name` containing a lazily initialized static
/// registry, an accessor for it, and free functions delegating to it. Attributes
/// and doc comments placed before the name are applied to the module.
///
/// # Examples
///
/// ```rust
/// use service_registry::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(app);
///
/// app::register(42i32).unwrap();
/// app::register("Hello".to_string()).unwrap();
///
/// let num: Arc<i32> = app::get().unwrap();
/// let msg: Arc<String> = app::get().unwrap();
///
/// assert_eq!(*num, 42);
/// assert_eq!(&**msg, "Hello");
/// ```
///
/// # Multiple Registries
///
/// Every invocation owns its own store, so registries never see each other's values:
///
/// ```rust
/// use service_registry::define_registry;
///
/// define_registry!(database);
/// define_registry!(cache);
///
/// database::register("db_connection".to_string()).unwrap();
///
/// assert!(database::contains::<String>());
/// assert!(!cache::contains::<String>());
/// ```
#[macro_export]
macro_rules! define_registry {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        pub mod $name {
            use std::sync::{Arc, LazyLock};

            static REGISTRY: LazyLock<$crate::Registry> = LazyLock::new($crate::Registry::new);

            /// The registry behind the free functions of this module.
            pub fn registry() -> &'static $crate::Registry {
                &REGISTRY
            }

            /// Register a value under its own type.
            pub fn register<T: Send + Sync + 'static>(value: T) -> Result<(), $crate::RegistryError> {
                REGISTRY.register(value)
            }

            /// Register an Arc-wrapped value under the key of `T`.
            pub fn register_arc<T: ?Sized + Send + Sync + 'static>(
                value: Arc<T>,
            ) -> Result<(), $crate::RegistryError> {
                REGISTRY.register_arc(value)
            }

            /// Retrieve the value registered for `T`.
            pub fn get<T: ?Sized + Send + Sync + 'static>() -> Result<Arc<T>, $crate::RegistryError> {
                REGISTRY.get()
            }

            /// Retrieve a cloned value from the registry.
            pub fn get_cloned<T: Clone + Send + Sync + 'static>() -> Result<T, $crate::RegistryError> {
                REGISTRY.get_cloned()
            }

            /// Check if a type is registered in the registry.
            pub fn contains<T: ?Sized + 'static>() -> bool {
                REGISTRY.contains::<T>()
            }

            /// Remove the value registered for `T`.
            pub fn remove<T: ?Sized + Send + Sync + 'static>() -> Result<Arc<T>, $crate::RegistryError> {
                REGISTRY.remove()
            }

            /// Remove every registered value.
            pub fn clear() {
                REGISTRY.clear()
            }

            pub fn len() -> usize {
                REGISTRY.len()
            }

            pub fn is_empty() -> bool {
                REGISTRY.is_empty()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static) {
                REGISTRY.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                REGISTRY.clear_trace_callback()
            }
        }
    };
}
