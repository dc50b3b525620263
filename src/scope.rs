//! Lifecycle scopes controlling instance caching and identity.

use std::fmt;

#[cfg(not(feature = "once-cell"))]
use std::sync::Mutex;

#[cfg(feature = "once-cell")]
use once_cell::sync::OnceCell;

use crate::binding::{AnyArc, Binding};
use crate::container::Container;
use crate::error::DiResult;

/// Lifecycle scope kinds controlling instance caching behavior
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, ScopeKind, Signature};
/// use std::sync::Arc;
///
/// struct Session;
///
/// let container = Container::new();
/// container
///     .bind_factory_in::<Session, _>(
///         "session",
///         Signature::new(),
///         |_| Ok(Session),
///         ScopeKind::Singleton,
///     )
///     .unwrap();
///
/// let a = container.get_named::<Session>("session").unwrap();
/// let b = container.get_named::<Session>("session").unwrap();
/// assert!(Arc::ptr_eq(&a, &b)); // Same instance
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// New instance per resolution, never cached
    ///
    /// Every `get` invokes the binding's build again. No state is kept,
    /// so no synchronization is needed.
    Dependent,
    /// Built once, cached forever
    ///
    /// The first `get` builds and stores; every later `get` returns the
    /// stored instance unconditionally. The cache slot is owned by the
    /// wrapping scope instance, never shared across keys or containers.
    Singleton,
}

impl ScopeKind {
    /// Returns `true` if this scope caches instances.
    pub fn is_cached(&self) -> bool {
        matches!(self, ScopeKind::Singleton)
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKind::Dependent => f.write_str("Dependent"),
            ScopeKind::Singleton => f.write_str("Singleton"),
        }
    }
}

/// Wraps exactly one binding and owns the caching decision for it.
///
/// For singletons the cache is a single slot: occupancy of the slot after
/// the first build is authoritative, not the content of the cached value.
///
/// Concurrency contract: on the default std path the slot lock is held
/// across the first build, so the build runs exactly once and concurrent
/// callers wait for it. With the `once-cell` feature, concurrent first
/// resolutions may redundantly build and exactly one result becomes the
/// permanently visible cache (relaxed variant). Either way the cached
/// value never changes once set.
pub(crate) struct Scope {
    kind: ScopeKind,
    binding: Binding,
    #[cfg(feature = "once-cell")]
    cell: Option<OnceCell<AnyArc>>,
    #[cfg(not(feature = "once-cell"))]
    cell: Option<Mutex<Option<AnyArc>>>,
}

impl Scope {
    pub(crate) fn new(kind: ScopeKind, binding: Binding) -> Self {
        let cell = match kind {
            ScopeKind::Singleton => {
                #[cfg(feature = "once-cell")]
                {
                    Some(OnceCell::new())
                }
                #[cfg(not(feature = "once-cell"))]
                {
                    Some(Mutex::new(None))
                }
            }
            ScopeKind::Dependent => None,
        };

        Self {
            kind,
            binding,
            cell,
        }
    }

    #[cfg(feature = "diagnostics")]
    pub(crate) fn kind(&self) -> ScopeKind {
        self.kind
    }

    #[cfg(feature = "diagnostics")]
    pub(crate) fn binding(&self) -> &Binding {
        &self.binding
    }

    pub(crate) fn resolve(&self, container: &Container) -> DiResult<AnyArc> {
        match self.kind {
            ScopeKind::Dependent => self.binding.build(container),
            ScopeKind::Singleton => self.resolve_singleton(container),
        }
    }

    #[cfg(feature = "once-cell")]
    fn resolve_singleton(&self, container: &Container) -> DiResult<AnyArc> {
        if let Some(cell) = &self.cell {
            // Fast path: already initialized
            if let Some(value) = cell.get() {
                return Ok(value.clone());
            }

            let value = self.binding.build(container)?;
            return Ok(cell.get_or_init(|| value.clone()).clone());
        }

        // No slot (shouldn't happen); behave like a dependent scope
        self.binding.build(container)
    }

    #[cfg(not(feature = "once-cell"))]
    fn resolve_singleton(&self, container: &Container) -> DiResult<AnyArc> {
        if let Some(cell) = &self.cell {
            let mut slot = cell.lock().unwrap();
            if let Some(value) = slot.as_ref() {
                return Ok(value.clone());
            }

            let value = self.binding.build(container)?;
            *slot = Some(value.clone());
            return Ok(value);
        }

        // No slot (shouldn't happen); behave like a dependent scope
        self.binding.build(container)
    }
}
