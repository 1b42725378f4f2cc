/// Events emitted by a registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`
/// and, with the `tracing` feature, logged at trace level.
///
/// # Examples
///
/// ```rust
/// use service_registry::RegistryEvent;
///
/// let event = RegistryEvent::Register { type_name: "i32", accepted: true };
/// assert_eq!(event.to_string(), "register { type_name: i32, accepted: true }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A value was offered for registration.
    Register {
        /// The type name the value was registered under
        type_name: &'static str,
        /// False when the key was already taken
        accepted: bool,
    },

    /// A value was requested from the registry.
    Get {
        type_name: &'static str,
        found: bool,
    },

    /// A type existence check was performed.
    Contains {
        type_name: &'static str,
        found: bool,
    },

    /// A value was asked to be removed.
    Remove {
        type_name: &'static str,
        found: bool,
    },

    /// The registry was emptied.
    Clear {
        /// Number of entries dropped from the store
        removed: usize,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Register {
                type_name,
                accepted,
            } => write!(
                f,
                "register {{ type_name: {}, accepted: {} }}",
                type_name, accepted
            ),
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {}, found: {} }}", type_name, found)
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(
                    f,
                    "contains {{ type_name: {}, found: {} }}",
                    type_name, found
                )
            }
            RegistryEvent::Remove { type_name, found } => {
                write!(f, "remove {{ type_name: {}, found: {} }}", type_name, found)
            }
            RegistryEvent::Clear { removed } => write!(f, "clear {{ removed: {} }}", removed),
        }
    }
}
