// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI configuration example.
//!
//! This example demonstrates:
//! - Registering required and optional INI files
//! - Reading flattened `section:key` values without regard to case
//! - Overriding values from a later file
//! - Listing a whole section
//! - Reloading automatically when a file changes (with the `reload` feature)
//!
//! To run this example:
//! ```bash
//! cargo run --example ini_usage
//! cargo run --example ini_usage --features reload
//! ```

use inicfg::prelude::*;
use std::fs;
use tempfile::TempDir;

#[cfg(feature = "reload")]
use std::thread;
#[cfg(feature = "reload")]
use std::time::Duration;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    println!("=== INI Configuration Example ===\n");

    let dir = TempDir::new()?;
    let base = r#"
; application defaults
environment = development

[Server]
Host = 0.0.0.0
Port = 8080

[Database]
Host = localhost
Port = 5432
Name = "app db"
"#;
    let local = r#"
[database]
host = db.internal
"#;
    fs::write(dir.path().join("app.ini"), base)?;
    fs::write(dir.path().join("local.ini"), local)?;

    let config = ConfigurationBuilder::new()
        .set_base_path(dir.path())
        .add_ini_file_with(IniFileOptions::new("app.ini").reload_on_change(true))?
        .add_ini_file("local.ini")?
        .add_ini_file_with(IniFileOptions::new("missing.ini").optional(true))?
        .build()?;

    println!("=== Lookups ===");
    println!("environment   = {}", config.get("environment")?);
    println!("server:port   = {}", config.get("SERVER:PORT")?);
    println!("database:host = {}", config.get("database:host")?);
    println!("database:name = {}", config.get("Database:Name")?);
    println!(
        "cache:ttl     = {}",
        config.get_or_default("cache:ttl", "300")
    );

    println!("\n=== [database] ===");
    for (key, value) in config.section("database") {
        println!("{key} = {value}");
    }

    println!("\n=== All keys ===");
    for key in config.keys() {
        println!("{key}");
    }

    #[cfg(feature = "reload")]
    {
        println!("\n=== Reload on change ===");
        println!("watchers running: {}", config.watcher_count());

        fs::write(
            dir.path().join("app.ini"),
            base.replace("Port = 8080", "Port = 9090"),
        )?;
        thread::sleep(Duration::from_millis(750));

        println!("server:port   = {}", config.get("server:port")?);
    }

    Ok(())
}
