//! Basic usage example for service-registry.
//!
//! Demonstrates:
//! - Registering a configuration struct and a trait-object service
//! - Retrieving them from unrelated functions
//! - The `AlreadyRegistered` / `NotRegistered` errors
//!
//! Run with: `cargo run --example basic_usage`

use service_registry::{define_registry, RegistryError};
use std::sync::Arc;

define_registry!(
    #[allow(dead_code)]
    app
);

#[derive(Debug, Clone, PartialEq)]
struct AppConfig {
    name: String,
    version: u32,
}

trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

struct StdoutLogger;

impl Logger for StdoutLogger {
    fn log(&self, message: &str) {
        println!("   [log] {message}");
    }
}

fn handle_request(path: &str) -> Result<(), RegistryError> {
    let logger = app::get::<dyn Logger>()?;
    let config: Arc<AppConfig> = app::get()?;
    logger.log(&format!("{} v{} serving {}", config.name, config.version, path));
    Ok(())
}

fn main() -> Result<(), RegistryError> {
    println!("=== service-registry: Basic Usage ===\n");

    println!("1. Registering services...");
    app::register(AppConfig {
        name: "MyApp".to_string(),
        version: 1,
    })?;
    app::register_arc::<dyn Logger>(Arc::new(StdoutLogger))?;

    println!("\n2. Resolving them elsewhere...");
    handle_request("/index.html")?;

    println!("\n3. Registration never overwrites...");
    if let Err(err) = app::register_arc::<dyn Logger>(Arc::new(StdoutLogger)) {
        println!("   {err}");
    }

    println!("\n4. Removing and looking up again...");
    app::remove::<dyn Logger>()?;
    if let Err(err) = handle_request("/about.html") {
        println!("   {err}");
    }

    app::clear();
    println!("\n   registry empty: {}", app::is_empty());
    Ok(())
}
