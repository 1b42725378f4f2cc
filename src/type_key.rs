use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a registered service.
///
/// Built from the `TypeId` of the service type, so two keys are equal exactly when
/// they denote the same type. The type name travels along for error messages and
/// trace events only; it never takes part in comparisons.
///
/// Trait objects are valid keys, which is how an implementation is registered
/// under the identity of the abstraction it satisfies:
///
/// Auto-trait bounds are part of a trait object's identity, so `dyn Logger` and
/// `dyn Logger + Send + Sync` are distinct keys even when `Logger` already
/// requires `Send + Sync`.
///
/// ```rust
/// use service_registry::TypeKey;
///
/// trait Logger: Send + Sync {}
/// struct ConsoleLogger;
/// impl Logger for ConsoleLogger {}
///
/// assert_eq!(TypeKey::of::<dyn Logger>(), TypeKey::of::<dyn Logger>());
/// assert_ne!(TypeKey::of::<dyn Logger>(), TypeKey::of::<ConsoleLogger>());
/// assert_ne!(TypeKey::of::<dyn Logger>(), TypeKey::of::<dyn Logger + Send + Sync>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key of the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully-qualified type name, e.g. `alloc::string::String`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
