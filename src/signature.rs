//! Declared parameter lists and the shared argument-resolution algorithm.
//!
//! A [`Signature`] is the registration-time declaration of a factory's or
//! constructor's parameters: an ordered list of named parameters, each
//! either hinted with a [`Key`] (resolved through the container) or left
//! hint-less (receiving the container handle itself). Both factory and
//! class bindings resolve their arguments through this module, so the
//! rules and error conditions are identical for the two.

use std::any::type_name;
use std::sync::Arc;

use crate::binding::AnyArc;
use crate::container::Container;
use crate::error::{DiError, DiResult};
use crate::key::Key;

/// One declared parameter: a name (for error messages) plus an optional
/// key hint. A hint-less parameter receives the container handle.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub(crate) name: &'static str,
    pub(crate) hint: Option<Key>,
}

/// Ordered parameter declaration for a factory or constructor.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, Signature};
///
/// struct Greeter { salutation: String }
///
/// let container = Container::new();
/// container.bind_value("salutation", "hello".to_string()).unwrap();
/// container
///     .bind_factory::<Greeter, _>(
///         "greeter",
///         Signature::new().keyed("salutation", "salutation"),
///         |args| {
///             Ok(Greeter { salutation: (*args.take::<String>()?).clone() })
///         },
///     )
///     .unwrap();
///
/// let greeter = container.get_named::<Greeter>("greeter").unwrap();
/// assert_eq!(greeter.salutation, "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Signature {
    params: Vec<ParamSpec>,
}

impl Signature {
    /// An empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Declares a parameter resolved by the type key of `T`.
    pub fn dep<T: 'static>(self, name: &'static str) -> Self {
        self.push(name, Some(Key::of::<T>()))
    }

    /// Declares a parameter resolved by an explicit key.
    pub fn keyed(self, name: &'static str, key: impl Into<Key>) -> Self {
        self.push(name, Some(key.into()))
    }

    /// Declares a hint-less parameter receiving the container handle.
    ///
    /// At most one such parameter may appear in a signature; a second one
    /// fails resolution with [`DiError::MissingTypeHint`].
    pub fn container(self, name: &'static str) -> Self {
        self.push(name, None)
    }

    fn push(mut self, name: &'static str, hint: Option<Key>) -> Self {
        self.params.push(ParamSpec { name, hint });
        self
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True when no parameters are declared.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Produces the ordered argument list for this signature.
    ///
    /// One slot per declared parameter, in declaration order. Hinted
    /// parameters resolve re-entrantly through the container; the first
    /// hint-less parameter receives the container handle, any further
    /// hint-less parameter fails with `MissingTypeHint` naming it.
    pub(crate) fn resolve(&self, container: &Container) -> DiResult<Args> {
        let mut values = Vec::with_capacity(self.params.len());
        let mut container_passed = false;

        for param in &self.params {
            match &param.hint {
                Some(key) => values.push(Arg::Instance(container.get_key(key)?)),
                None => {
                    if container_passed {
                        return Err(DiError::MissingTypeHint(param.name));
                    }
                    values.push(Arg::Container(container.clone()));
                    container_passed = true;
                }
            }
        }

        Ok(Args {
            values: values.into_iter(),
        })
    }
}

pub(crate) enum Arg {
    Instance(AnyArc),
    Container(Container),
}

/// The resolved, ordered argument list handed to a factory or constructor.
///
/// Arguments are consumed front to back, mirroring the declaration order
/// of the [`Signature`] they were resolved from.
pub struct Args {
    values: std::vec::IntoIter<Arg>,
}

impl Args {
    /// Takes the next argument, downcast to `T`.
    ///
    /// Fails with [`DiError::TypeMismatch`] when the slot holds a
    /// different type and with [`DiError::UnresolvableDependency`] when
    /// the declared parameters are already exhausted.
    pub fn take<T: Send + Sync + 'static>(&mut self) -> DiResult<Arc<T>> {
        match self.values.next() {
            Some(Arg::Instance(any)) => any
                .downcast::<T>()
                .map_err(|_| DiError::TypeMismatch(type_name::<T>())),
            Some(Arg::Container(_)) => Err(DiError::TypeMismatch(type_name::<T>())),
            None => Err(DiError::UnresolvableDependency(type_name::<T>())),
        }
    }

    /// Takes the next argument, which must be the container handle slot.
    pub fn take_container(&mut self) -> DiResult<Container> {
        match self.values.next() {
            Some(Arg::Container(container)) => Ok(container),
            Some(Arg::Instance(_)) => Err(DiError::TypeMismatch("Container")),
            None => Err(DiError::UnresolvableDependency("Container")),
        }
    }

    /// Number of arguments not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}
