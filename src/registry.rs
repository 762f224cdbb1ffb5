//! Shared instance registry.
//!
//! Holds at most one instance per type, constructed lazily on first request.
//! The registry is an ordinary value: create one per process (or per test),
//! wrap it in an `Arc` and hand it to whatever needs shared instances.
//!
//! # Example
//!
//! ```rust
//! use keystone::registry::SharedInstanceRegistry;
//! use std::sync::Arc;
//!
//! struct DatabaseDriver {
//!     url: String,
//! }
//!
//! let registry = Arc::new(SharedInstanceRegistry::new());
//!
//! let first = registry.get_or_init(|| DatabaseDriver { url: "db://primary".to_string() });
//! let second = registry.get_or_init(|| DatabaseDriver { url: "db://replica".to_string() });
//!
//! assert!(Arc::ptr_eq(&first, &second));
//! assert_eq!(second.url, "db://primary");
//! ```

use chrono::{DateTime, Utc};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

type SharedInstance = Arc<dyn Any + Send + Sync>;

struct Entry {
    instance: SharedInstance,
    type_name: &'static str,
    created_at: DateTime<Utc>,
    sequence: u64,
}

/// Description of one live registry entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryEntryInfo {
    pub type_name: &'static str,
    pub created_at: DateTime<Utc>,
    /// Insertion order, starting at zero
    pub sequence: u64,
}

/// Registry guaranteeing at most one instance per type.
///
/// Every lookup-or-construct runs under a single mutex, so racing first
/// callers for the same type invoke the factory once and all receive the
/// same `Arc`. Factories run while the lock is held and must not call back
/// into the same registry.
#[derive(Default)]
pub struct SharedInstanceRegistry {
    entries: Mutex<HashMap<TypeId, Entry>>,
    // Only advanced while `entries` is locked.
    next_sequence: AtomicU64,
}

impl SharedInstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the instance of `T`, constructing it with `factory` if absent.
    ///
    /// The factory is invoked at most once per type for the lifetime of the
    /// registry. If it fails, the error is returned unchanged and nothing is
    /// stored, so a later call may try again.
    pub fn get_or_create<T, E, F>(&self, factory: F) -> Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Result<T, E>,
    {
        let key = TypeId::of::<T>();
        let mut entries = self.lock();

        if let Some(existing) = entries.get(&key).and_then(|entry| downcast::<T>(entry)) {
            debug!(type_name = type_name::<T>(), "Reusing shared instance");
            return Ok(existing);
        }

        let instance = match factory() {
            Ok(value) => Arc::new(value),
            Err(err) => {
                warn!(
                    type_name = type_name::<T>(),
                    "Shared instance factory failed"
                );
                return Err(err);
            }
        };

        let erased: SharedInstance = instance.clone();
        entries.insert(
            key,
            Entry {
                instance: erased,
                type_name: type_name::<T>(),
                created_at: Utc::now(),
                sequence: self.next_sequence.fetch_add(1, Ordering::Relaxed),
            },
        );
        info!(
            type_name = type_name::<T>(),
            live = entries.len(),
            "Created shared instance"
        );

        Ok(instance)
    }

    /// Infallible form of [`get_or_create`](Self::get_or_create).
    pub fn get_or_init<T, F>(&self, factory: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        match self.get_or_create::<T, Infallible, _>(|| Ok(factory())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }

    /// Return the instance of `T` without constructing one.
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.lock().get(&TypeId::of::<T>()).and_then(downcast::<T>)
    }

    pub fn contains<T>(&self) -> bool
    where
        T: Any + Send + Sync,
    {
        self.lock().contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Live entries, oldest first.
    pub fn registered(&self) -> Vec<RegistryEntryInfo> {
        let mut infos: Vec<RegistryEntryInfo> = self
            .lock()
            .values()
            .map(|entry| RegistryEntryInfo {
                type_name: entry.type_name,
                created_at: entry.created_at,
                sequence: entry.sequence,
            })
            .collect();
        infos.sort_by_key(|info| info.sequence);
        infos
    }

    // A factory that panicked never inserted anything, so the map behind a
    // poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SharedInstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&'static str> = self.lock().values().map(|e| e.type_name).collect();
        f.debug_struct("SharedInstanceRegistry")
            .field("types", &names)
            .finish()
    }
}

fn downcast<T: Any + Send + Sync>(entry: &Entry) -> Option<Arc<T>> {
    Arc::clone(&entry.instance).downcast::<T>().ok()
}
