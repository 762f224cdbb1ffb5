//! Concurrency tests for the shared instance registry.

use keystone::registry::SharedInstanceRegistry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

struct DatabaseDriver {
    id: usize,
}

struct MetricsSink;

const CALLERS: usize = 16;

#[test]
fn racing_first_callers_share_one_instance() {
    let registry = Arc::new(SharedInstanceRegistry::new());
    let constructed = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|caller| {
            let registry = Arc::clone(&registry);
            let constructed = Arc::clone(&constructed);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_or_init(|| {
                    constructed.fetch_add(1, Ordering::SeqCst);
                    // Widen the race window.
                    thread::sleep(Duration::from_millis(5));
                    DatabaseDriver { id: caller }
                })
            })
        })
        .collect();

    let drivers: Vec<Arc<DatabaseDriver>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    let first = &drivers[0];
    for driver in &drivers {
        assert!(Arc::ptr_eq(first, driver));
        assert_eq!(driver.id, first.id);
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn racing_callers_for_different_types_do_not_interfere() {
    let registry = SharedInstanceRegistry::new();
    let drivers_built = AtomicUsize::new(0);
    let sinks_built = AtomicUsize::new(0);
    let barrier = Barrier::new(CALLERS);

    thread::scope(|scope| {
        for caller in 0..CALLERS {
            let registry = &registry;
            let drivers_built = &drivers_built;
            let sinks_built = &sinks_built;
            let barrier = &barrier;
            scope.spawn(move || {
                barrier.wait();
                if caller % 2 == 0 {
                    registry.get_or_init(|| {
                        drivers_built.fetch_add(1, Ordering::SeqCst);
                        DatabaseDriver { id: caller }
                    });
                } else {
                    registry.get_or_init(|| {
                        sinks_built.fetch_add(1, Ordering::SeqCst);
                        MetricsSink
                    });
                }
            });
        }
    });

    assert_eq!(drivers_built.load(Ordering::SeqCst), 1);
    assert_eq!(sinks_built.load(Ordering::SeqCst), 1);
    assert!(registry.contains::<DatabaseDriver>());
    assert!(registry.contains::<MetricsSink>());
    assert_eq!(registry.len(), 2);
}

#[test]
fn failed_factories_under_contention_never_store_entries() {
    let registry = SharedInstanceRegistry::new();
    let attempts = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..CALLERS {
            scope.spawn(|| {
                let result = registry.get_or_create::<DatabaseDriver, String, _>(|| {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err("database offline".to_string())
                });
                assert_eq!(result.err().as_deref(), Some("database offline"));
            });
        }
    });

    assert_eq!(attempts.load(Ordering::SeqCst), CALLERS);
    assert!(registry.is_empty());
}
