//! Binding variants: value, factory, and class-construction recipes.
//!
//! A [`Binding`] is a pure capability `(container) -> instance`; it never
//! caches. Caching and instance identity are the wrapping scope's job
//! (see [`crate::scope`]). The variant is chosen explicitly at
//! registration time, so a registered value that happens to be callable
//! is never mistaken for a factory.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::class::{ClassDefinition, Injectable};
use crate::container::Container;
use crate::error::DiResult;
use crate::signature::{Args, Signature};

/// Type-erased Arc for storage
pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

type FactoryFn = Arc<dyn Fn(&mut Args) -> DiResult<AnyArc> + Send + Sync>;
type ConstructFn = Arc<dyn Fn(&Container) -> DiResult<AnyArc> + Send + Sync>;

/// A registered resource recipe.
///
/// # Examples
///
/// ```rust
/// use bindery::{Binding, Container, Signature};
///
/// let container = Container::new();
/// container.bind("answer", Binding::value(42u32)).unwrap();
/// container
///     .bind(
///         "doubled",
///         Binding::factory::<u32, _>(
///             Signature::new().keyed("answer", "answer"),
///             |args| Ok(*args.take::<u32>()? * 2),
///         ),
///     )
///     .unwrap();
///
/// assert_eq!(*container.get_named::<u32>("doubled").unwrap(), 84);
/// ```
pub enum Binding {
    /// Wraps one already-computed value; build always returns that value
    /// with the same identity.
    Value(AnyArc),
    /// Invokes a user-supplied closure with auto-resolved arguments.
    Factory(FactoryBinding),
    /// Reflectively constructs and configures an instance.
    Class(ClassBinding),
}

impl Binding {
    /// A value binding. The value is stored verbatim, even when callable.
    pub fn value<T: Send + Sync + 'static>(value: T) -> Self {
        Binding::Value(Arc::new(value))
    }

    /// A factory binding over a declared signature.
    pub fn factory<T, F>(signature: Signature, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&mut Args) -> DiResult<T> + Send + Sync + 'static,
    {
        Binding::Factory(FactoryBinding {
            signature,
            factory: Arc::new(move |args| factory(args).map(|v| Arc::new(v) as AnyArc)),
        })
    }

    /// A class binding with auto-discovered construction.
    pub fn class<T: Injectable>() -> Self {
        Binding::Class(ClassBinding::auto::<T>())
    }

    /// A class binding with an explicit construction recipe.
    pub fn class_with<T: Send + Sync + 'static>(definition: ClassDefinition<T>) -> Self {
        Binding::Class(ClassBinding::from_definition(definition))
    }

    /// Produces one instance. Side effects happen only through nested
    /// `get` calls on the container.
    pub(crate) fn build(&self, container: &Container) -> DiResult<AnyArc> {
        match self {
            Binding::Value(value) => Ok(value.clone()),
            Binding::Factory(factory) => factory.build(container),
            Binding::Class(class) => class.build(container),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Value(_) => f.write_str("Binding::Value"),
            Binding::Factory(factory) => write!(f, "Binding::Factory({:?})", factory),
            Binding::Class(class) => write!(f, "Binding::Class({})", class.class_name),
        }
    }
}

/// Wraps one user-supplied closure plus its declared parameter list.
pub struct FactoryBinding {
    signature: Signature,
    factory: FactoryFn,
}

impl FactoryBinding {
    fn build(&self, container: &Container) -> DiResult<AnyArc> {
        let mut args = self.signature.resolve(container)?;
        (self.factory)(&mut args)
    }
}

impl fmt::Debug for FactoryBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryBinding")
            .field("params", &self.signature.len())
            .finish()
    }
}

/// Wraps a target type plus its construction recipe, type-erased so the
/// container can store heterogeneous class bindings.
pub struct ClassBinding {
    class_name: &'static str,
    construct: ConstructFn,
}

impl ClassBinding {
    pub(crate) fn auto<T: Injectable>() -> Self {
        Self {
            class_name: std::any::type_name::<T>(),
            construct: Arc::new(|container| {
                T::inject(container).map(|v| Arc::new(v) as AnyArc)
            }),
        }
    }

    pub(crate) fn from_definition<T: Send + Sync + 'static>(
        definition: ClassDefinition<T>,
    ) -> Self {
        Self {
            class_name: std::any::type_name::<T>(),
            construct: Arc::new(move |container| {
                definition.instantiate(container).map(|v| Arc::new(v) as AnyArc)
            }),
        }
    }

    fn build(&self, container: &Container) -> DiResult<AnyArc> {
        (self.construct)(container)
    }
}

impl fmt::Debug for ClassBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassBinding")
            .field("class", &self.class_name)
            .finish()
    }
}
