//! Diagnostic observers for resolution traceability.
//!
//! Hooks for observing resolution events: what keys are being resolved,
//! how long builds take, and which resolutions fail. Observer calls are
//! made synchronously during resolution; keep implementations lightweight.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::DiError;
use crate::key::Key;

/// Observer trait for container resolution events.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, DiError, DiObserver, Key};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// struct CountingObserver(std::sync::atomic::AtomicUsize);
///
/// impl DiObserver for CountingObserver {
///     fn resolving(&self, _key: &Key) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
///     }
///     fn resolved(&self, _key: &Key, _duration: Duration) {}
///     fn resolution_failed(&self, _key: &Key, _error: &DiError) {}
/// }
///
/// let container = Container::new();
/// let observer = Arc::new(CountingObserver(Default::default()));
/// container.add_observer(observer.clone());
/// container.bind_value("port", 8080u16).unwrap();
/// let _ = container.get_named::<u16>("port").unwrap();
/// assert_eq!(observer.0.load(std::sync::atomic::Ordering::SeqCst), 1);
/// ```
pub trait DiObserver: Send + Sync {
    /// Called before a key's scope is asked to resolve.
    fn resolving(&self, key: &Key);

    /// Called after a successful resolution with the elapsed build time.
    fn resolved(&self, key: &Key, duration: Duration);

    /// Called when a resolution fails.
    fn resolution_failed(&self, key: &Key, error: &DiError);
}

/// Ready-made observer writing resolution events to stderr.
pub struct LoggingObserver {
    prefix: String,
}

impl LoggingObserver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new("bindery")
    }
}

impl DiObserver for LoggingObserver {
    fn resolving(&self, key: &Key) {
        eprintln!("[{}] resolving {}", self.prefix, key.display_name());
    }

    fn resolved(&self, key: &Key, duration: Duration) {
        eprintln!(
            "[{}] resolved {} in {:?}",
            self.prefix,
            key.display_name(),
            duration
        );
    }

    fn resolution_failed(&self, key: &Key, error: &DiError) {
        eprintln!(
            "[{}] FAILED {}: {}",
            self.prefix,
            key.display_name(),
            error
        );
    }
}

/// Fan-out over the registered observers, with a cheap emptiness check so
/// the unobserved resolution path pays nothing beyond one read lock.
#[derive(Default)]
pub(crate) struct Observers {
    observers: RwLock<Vec<Arc<dyn DiObserver>>>,
}

impl Observers {
    pub(crate) fn add(&self, observer: Arc<dyn DiObserver>) {
        self.observers.write().unwrap().push(observer);
    }

    pub(crate) fn has_observers(&self) -> bool {
        !self.observers.read().unwrap().is_empty()
    }

    pub(crate) fn resolving(&self, key: &Key) {
        for observer in self.observers.read().unwrap().iter() {
            observer.resolving(key);
        }
    }

    pub(crate) fn resolved(&self, key: &Key, duration: Duration) {
        for observer in self.observers.read().unwrap().iter() {
            observer.resolved(key, duration);
        }
    }

    pub(crate) fn failed(&self, key: &Key, error: &DiError) {
        for observer in self.observers.read().unwrap().iter() {
            observer.resolution_failed(key, error);
        }
    }
}
