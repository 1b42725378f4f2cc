//! Integration tests against the process-wide `global` registry.
//!
//! NOTE: All tests use #[serial] because they share the same static registry.
//! Each test starts from `global::clear()`.

use serial_test::serial;
use service_registry::{global, RegistryError, TypeKey};
use std::sync::Arc;

trait Logger: Send + Sync {
    fn log(&self, message: &str) -> String;
}

struct PrefixLogger {
    prefix: &'static str,
}

impl Logger for PrefixLogger {
    fn log(&self, message: &str) -> String {
        format!("{} {}", self.prefix, message)
    }
}

#[test]
#[serial]
fn test_logger_lifecycle() {
    global::clear();

    let a: Arc<dyn Logger> = Arc::new(PrefixLogger { prefix: "[A]" });
    let b: Arc<dyn Logger> = Arc::new(PrefixLogger { prefix: "[B]" });

    global::register_arc(a.clone()).unwrap();
    let found = global::get::<dyn Logger>().unwrap();
    assert!(Arc::ptr_eq(&found, &a));

    assert_eq!(
        global::register_arc(b),
        Err(RegistryError::AlreadyRegistered {
            key: TypeKey::of::<dyn Logger>()
        })
    );
    assert_eq!(global::get::<dyn Logger>().unwrap().log("hi"), "[A] hi");

    global::remove::<dyn Logger>().unwrap();
    assert_eq!(
        global::get::<dyn Logger>().err(),
        Some(RegistryError::NotRegistered {
            key: TypeKey::of::<dyn Logger>()
        })
    );
}

#[test]
#[serial]
fn test_error_names_the_key() {
    global::clear();

    let err = global::get::<dyn Logger>().err().unwrap();
    assert_eq!(err.key(), TypeKey::of::<dyn Logger>());
    assert!(err.to_string().starts_with("Type not registered: dyn "));
    assert!(err.to_string().ends_with("Logger"));
}

#[test]
#[serial]
fn test_never_registered() {
    global::clear();

    #[derive(Debug)]
    struct Missing;

    assert!(!global::contains::<Missing>());
    assert_eq!(
        global::get::<Missing>().unwrap_err(),
        RegistryError::NotRegistered {
            key: TypeKey::of::<Missing>()
        }
    );
}

#[test]
#[serial]
fn test_remove_absent_leaves_store_unchanged() {
    global::clear();

    global::register(1u32).unwrap();
    global::register("config".to_string()).unwrap();

    assert_eq!(
        global::remove::<u64>().unwrap_err(),
        RegistryError::NotRegistered {
            key: TypeKey::of::<u64>()
        }
    );
    assert_eq!(global::len(), 2);
    assert_eq!(*global::get::<u32>().unwrap(), 1);
    assert_eq!(&*global::get::<String>().unwrap(), "config");
}

#[test]
#[serial]
fn test_clear_removes_everything() {
    global::clear();

    #[derive(Debug)]
    struct Database;
    #[derive(Debug)]
    struct Cache;

    global::register(Database).unwrap();
    global::register(Cache).unwrap();
    global::register_arc::<dyn Logger>(Arc::new(PrefixLogger { prefix: "[C]" })).unwrap();

    global::clear();

    assert!(!global::contains::<Database>());
    assert!(!global::contains::<Cache>());
    assert!(!global::contains::<dyn Logger>());
    assert!(global::is_empty());
}

#[test]
#[serial]
fn test_accessor_shares_the_store() {
    global::clear();

    global::registry().register(3i8).unwrap();
    assert!(global::contains::<i8>());
    assert_eq!(global::get_cloned::<i8>().unwrap(), 3);
}
