//! The container: a registry mapping keys to scoped bindings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use crate::binding::{AnyArc, Binding};
use crate::class::{ClassDefinition, Injectable};
use crate::error::{DiError, DiResult};
use crate::internal::StackGuard;
use crate::key::Key;
use crate::observer::{DiObserver, Observers};
use crate::scope::{Scope, ScopeKind};
use crate::signature::{Args, Signature};

/// Small dependency injection container that can also double as a
/// service locator. Or maybe the opposite.
///
/// Maps string or type [`Key`]s to scoped [`Binding`]s and resolves a key
/// to an instance on demand. Resolution is re-entrant: a binding's
/// declared dependencies are looked up through the same container, so a
/// factory pulling in other registered resources just works.
///
/// The container is a cheap-to-clone handle over shared state and is safe
/// to share across threads. Registration is expected to happen before
/// concurrent resolution begins; concurrent registration into one
/// container is unsupported.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, Signature};
///
/// let container = Container::new();
/// container
///     .bind_value("greeting", "hello".to_string())
///     .unwrap()
///     .bind_factory::<String, _>(
///         "shout",
///         Signature::new().keyed("greeting", "greeting"),
///         |args| Ok(format!("{}!", args.take::<String>()?)),
///     )
///     .unwrap();
///
/// assert_eq!(&*container.get_named::<String>("shout").unwrap(), "hello!");
/// ```
pub struct Container {
    inner: Arc<ContainerInner>,
}

struct ContainerInner {
    /// Registered bindings. Keys are immutable once present.
    bindings: RwLock<HashMap<Key, Arc<Scope>>>,
    /// Scopes synthesized by `get_auto` for unregistered keys, memoized
    /// per first-seen key. Never promoted to registered bindings.
    synthesized: Mutex<HashMap<Key, Arc<Scope>>>,
    /// Scope applied to registrations that omit an explicit scope.
    default_scope: RwLock<ScopeKind>,
    observers: Observers,
}

impl Container {
    /// Creates an empty container with a Dependent default scope.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                bindings: RwLock::new(HashMap::new()),
                synthesized: Mutex::new(HashMap::new()),
                default_scope: RwLock::new(ScopeKind::Dependent),
                observers: Observers::default(),
            }),
        }
    }

    /// Changes the scope applied to subsequent registrations (and future
    /// first-time synthesized lookups) that omit an explicit scope.
    /// Already-registered bindings keep their scope.
    pub fn set_default_scope(&self, kind: ScopeKind) {
        *self.inner.default_scope.write().unwrap() = kind;
    }

    /// The scope currently applied to unscoped registrations.
    pub fn default_scope(&self) -> ScopeKind {
        *self.inner.default_scope.read().unwrap()
    }

    /// Registers a resolution observer.
    pub fn add_observer(&self, observer: Arc<dyn DiObserver>) {
        self.inner.observers.add(observer);
    }

    // ===== Registration =====

    /// Stores a new binding under `key`, wrapped in the current default
    /// scope. Returns the container for chained registration.
    ///
    /// Fails with [`DiError::DuplicateKey`] when the key is already
    /// present and with [`DiError::InvalidKey`] for an empty name key.
    pub fn bind(&self, key: impl Into<Key>, binding: Binding) -> DiResult<&Self> {
        let scope = self.default_scope();
        self.bind_in(key, binding, scope)
    }

    /// Stores a new binding under `key` with an explicit scope.
    pub fn bind_in(
        &self,
        key: impl Into<Key>,
        binding: Binding,
        scope: ScopeKind,
    ) -> DiResult<&Self> {
        let key = key.into();
        key.validate()?;

        let mut bindings = self.inner.bindings.write().unwrap();
        if bindings.contains_key(&key) {
            return Err(DiError::DuplicateKey(key.display_name()));
        }
        bindings.insert(key, Arc::new(Scope::new(scope, binding)));
        Ok(self)
    }

    /// Stores a raw value. Always a literal, even for callable values.
    pub fn bind_value<T: Send + Sync + 'static>(
        &self,
        key: impl Into<Key>,
        value: T,
    ) -> DiResult<&Self> {
        self.bind(key, Binding::value(value))
    }

    /// Stores a raw value with an explicit scope.
    pub fn bind_value_in<T: Send + Sync + 'static>(
        &self,
        key: impl Into<Key>,
        value: T,
        scope: ScopeKind,
    ) -> DiResult<&Self> {
        self.bind_in(key, Binding::value(value), scope)
    }

    /// Stores a factory with its declared parameter signature.
    pub fn bind_factory<T, F>(
        &self,
        key: impl Into<Key>,
        signature: Signature,
        factory: F,
    ) -> DiResult<&Self>
    where
        T: Send + Sync + 'static,
        F: Fn(&mut Args) -> DiResult<T> + Send + Sync + 'static,
    {
        self.bind(key, Binding::factory::<T, F>(signature, factory))
    }

    /// Stores a factory with an explicit scope.
    pub fn bind_factory_in<T, F>(
        &self,
        key: impl Into<Key>,
        signature: Signature,
        factory: F,
        scope: ScopeKind,
    ) -> DiResult<&Self>
    where
        T: Send + Sync + 'static,
        F: Fn(&mut Args) -> DiResult<T> + Send + Sync + 'static,
    {
        self.bind_in(key, Binding::factory::<T, F>(signature, factory), scope)
    }

    /// Registers a class binding with auto-discovered construction.
    pub fn bind_class<T: Injectable>(&self, key: impl Into<Key>) -> DiResult<&Self> {
        self.bind(key, Binding::class::<T>())
    }

    /// Registers an auto-discovered class binding with an explicit scope.
    pub fn bind_class_in<T: Injectable>(
        &self,
        key: impl Into<Key>,
        scope: ScopeKind,
    ) -> DiResult<&Self> {
        self.bind_in(key, Binding::class::<T>(), scope)
    }

    /// Registers a class binding with an explicit construction recipe.
    pub fn bind_class_with<T: Send + Sync + 'static>(
        &self,
        key: impl Into<Key>,
        definition: ClassDefinition<T>,
    ) -> DiResult<&Self> {
        self.bind(key, Binding::class_with(definition))
    }

    /// Registers an explicit class recipe with an explicit scope.
    pub fn bind_class_with_in<T: Send + Sync + 'static>(
        &self,
        key: impl Into<Key>,
        definition: ClassDefinition<T>,
        scope: ScopeKind,
    ) -> DiResult<&Self> {
        self.bind_in(key, Binding::class_with(definition), scope)
    }

    /// Whether `key` is registered. Synthesized scopes don't count.
    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.inner.bindings.read().unwrap().contains_key(&key.into())
    }

    // ===== Resolution =====

    /// Resolves the type key of `T`.
    pub fn get<T: Send + Sync + 'static>(&self) -> DiResult<Arc<T>> {
        let any = self.get_key(&Key::of::<T>())?;
        any.downcast::<T>()
            .map_err(|_| DiError::TypeMismatch(std::any::type_name::<T>()))
    }

    /// Resolves a string key and downcasts the result to `T`.
    pub fn get_named<T: Send + Sync + 'static>(&self, name: &'static str) -> DiResult<Arc<T>> {
        let any = self.get_key(&Key::Name(name))?;
        any.downcast::<T>()
            .map_err(|_| DiError::TypeMismatch(std::any::type_name::<T>()))
    }

    /// Resolves a key to a type-erased instance.
    ///
    /// Fails with [`DiError::UndeclaredResource`] for unregistered keys;
    /// only [`get_auto`](Self::get_auto) falls back to on-the-fly
    /// construction.
    pub fn get_key(&self, key: &Key) -> DiResult<AnyArc> {
        let scope = self.inner.bindings.read().unwrap().get(key).cloned();
        match scope {
            Some(scope) => self.resolve_scope(key, &scope),
            None => Err(DiError::UndeclaredResource(key.display_name())),
        }
    }

    /// Resolves the type key of `T`, constructing unregistered keys on
    /// the fly.
    ///
    /// When `T` is not registered, a class binding is synthesized from
    /// `T`'s [`Injectable`] implementation and wrapped in the *current*
    /// default scope. The synthesized scope is memoized per first-seen
    /// key (without registering it), so repeated lookups reuse the same
    /// scope: independent instances under a Dependent default, one shared
    /// instance under a Singleton default. A later
    /// [`set_default_scope`](Self::set_default_scope) does not change a
    /// scope that was already synthesized.
    pub fn get_auto<T: Injectable>(&self) -> DiResult<Arc<T>> {
        let key = Key::of::<T>();

        // A registered binding always wins over synthesis
        let registered = self.inner.bindings.read().unwrap().get(&key).cloned();
        let scope = match registered {
            Some(scope) => scope,
            None => self.synthesize::<T>(&key),
        };

        let any = self.resolve_scope(&key, &scope)?;
        any.downcast::<T>()
            .map_err(|_| DiError::TypeMismatch(std::any::type_name::<T>()))
    }

    fn synthesize<T: Injectable>(&self, key: &Key) -> Arc<Scope> {
        let mut synthesized = self.inner.synthesized.lock().unwrap();
        synthesized
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Scope::new(self.default_scope(), Binding::class::<T>())))
            .clone()
    }

    fn resolve_scope(&self, key: &Key, scope: &Scope) -> DiResult<AnyArc> {
        let _guard = StackGuard::enter(key)?;

        if self.inner.observers.has_observers() {
            let start = Instant::now();
            self.inner.observers.resolving(key);

            let result = scope.resolve(self);
            match &result {
                Ok(_) => self.inner.observers.resolved(key, start.elapsed()),
                Err(error) => self.inner.observers.failed(key, error),
            }
            result
        } else {
            // Fast path: no observer overhead
            scope.resolve(self)
        }
    }

    #[cfg(feature = "diagnostics")]
    pub fn to_debug_string(&self) -> String {
        let mut s = String::from("=== Container Debug ===\n");
        s.push_str("Bindings:\n");
        for (key, scope) in self.inner.bindings.read().unwrap().iter() {
            s.push_str(&format!(
                "  {}: {} {:?}\n",
                key.display_name(),
                scope.kind(),
                scope.binding()
            ));
        }
        s.push_str("Synthesized:\n");
        for (key, scope) in self.inner.synthesized.lock().unwrap().iter() {
            s.push_str(&format!("  {}: {}\n", key.display_name(), scope.kind()));
        }
        s
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Container {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scope_starts_dependent() {
        let container = Container::new();
        assert_eq!(container.default_scope(), ScopeKind::Dependent);
        container.set_default_scope(ScopeKind::Singleton);
        assert_eq!(container.default_scope(), ScopeKind::Singleton);
    }

    #[test]
    fn clones_share_state() {
        let container = Container::new();
        let other = container.clone();
        container.bind_value("port", 8080u16).unwrap();
        assert_eq!(*other.get_named::<u16>("port").unwrap(), 8080);
    }

    #[test]
    fn invalid_key_is_rejected() {
        let container = Container::new();
        assert_eq!(
            container.bind_value("", 1u8).err(),
            Some(DiError::InvalidKey(""))
        );
    }
}
