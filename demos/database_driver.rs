//! Database Driver
//!
//! This demo shows several threads racing to obtain one shared database
//! driver from an injected registry.
//!
//! Key concepts:
//! - One instance per type, created on first demand
//! - Construction runs once even when callers race
//! - Construction failures reach the caller and store nothing
//!
//! Run with: cargo run --example database_driver

use keystone::registry::SharedInstanceRegistry;
use std::sync::Arc;
use std::thread;

#[derive(Debug)]
struct DatabaseDriver {
    url: String,
}

impl DatabaseDriver {
    fn connect(url: &str) -> Result<Self, String> {
        if url.is_empty() {
            return Err("no database url configured".to_string());
        }
        println!("  [driver] opening connection to {url}");
        Ok(Self {
            url: url.to_string(),
        })
    }
}

#[derive(Debug)]
struct ReportCache;

fn connect_db(registry: &SharedInstanceRegistry, url: &str) -> Result<Arc<DatabaseDriver>, String> {
    let driver = registry.get_or_create(|| DatabaseDriver::connect(url))?;
    let current = thread::current();
    println!(
        "  [{}] using driver {:p} -> {}",
        current.name().unwrap_or("main"),
        Arc::as_ptr(&driver),
        driver.url
    );
    Ok(driver)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Database Driver ===\n");

    let registry = Arc::new(SharedInstanceRegistry::new());

    println!("A failing factory stores nothing:");
    if let Err(err) = connect_db(&registry, "") {
        println!("  connect failed: {err}");
    }
    println!("  registry empty: {}\n", registry.is_empty());

    println!("Racing threads:");
    let workers: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::Builder::new()
                .name(format!("worker-{i}"))
                .spawn(move || connect_db(&registry, "postgres://localhost/app"))
        })
        .collect();

    let mut drivers = Vec::new();
    for worker in workers {
        match worker.map(|handle| handle.join()) {
            Ok(Ok(Ok(driver))) => drivers.push(driver),
            Ok(Ok(Err(err))) => println!("  connect failed: {err}"),
            Ok(Err(_)) => println!("  worker panicked"),
            Err(err) => println!("  could not spawn worker: {err}"),
        }
    }

    let shared = drivers.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1]));
    println!("\nAll workers share one driver: {shared}");

    registry.get_or_init(|| ReportCache);
    println!("\nRegistered instances:");
    for entry in registry.registered() {
        println!("  {} (created {})", entry.type_name, entry.created_at);
    }

    println!("\n=== Demo Complete ===");
}
