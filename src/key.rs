//! Registry key types for the dependency injection container.

use std::any::TypeId;

use crate::error::{DiError, DiResult};

/// Key for binding storage and lookup.
///
/// Keys uniquely identify bindings in a [`Container`](crate::Container).
/// A key is either an opaque string name or a type identifier (when a type
/// is used as its own key for constructor-injectable types). Keys are
/// unique within a container: registering the same key twice fails with
/// [`DiError::DuplicateKey`] rather than overwriting.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, Key};
///
/// struct Config { port: u16 }
///
/// let container = Container::new();
/// container.bind_value("greeting", "hello".to_string()).unwrap();
/// container.bind_value(Key::of::<Config>(), Config { port: 8080 }).unwrap();
///
/// let greeting = container.get_named::<String>("greeting").unwrap();
/// let config = container.get::<Config>().unwrap();
/// assert_eq!(&*greeting, "hello");
/// assert_eq!(config.port, 8080);
/// ```
#[derive(Debug, Clone)]
pub enum Key {
    /// Concrete type key with TypeId and name for diagnostics
    Type(TypeId, &'static str),
    /// Opaque string name key
    Name(&'static str),
}

impl Key {
    /// Builds the type key for `T`.
    #[inline(always)]
    pub fn of<T: 'static>() -> Key {
        Key::Type(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    /// Builds a string name key.
    pub fn name(name: &'static str) -> Key {
        Key::Name(name)
    }

    /// Get the type or key name for display
    ///
    /// Returns the human-readable name for error messages and dependency
    /// paths. For type keys this is the `std::any::type_name` result.
    pub fn display_name(&self) -> &'static str {
        match self {
            Key::Type(_, name) => name,
            Key::Name(name) => name,
        }
    }

    /// Ensures the key is usable as a registry key.
    ///
    /// Name keys must be non-empty.
    pub(crate) fn validate(&self) -> DiResult<()> {
        match self {
            Key::Name(name) if name.is_empty() => Err(DiError::InvalidKey(name)),
            _ => Ok(()),
        }
    }
}

impl From<&'static str> for Key {
    fn from(name: &'static str) -> Self {
        Key::Name(name)
    }
}

// Hot path: TypeId-only comparison for type keys, the name is diagnostics only
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Type(a, _), Key::Type(b, _)) => a == b,
            (Key::Name(a), Key::Name(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl std::hash::Hash for Key {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Key::Type(id, _) => {
                0u8.hash(state); // Discriminant
                id.hash(state);
            }
            Key::Name(name) => {
                1u8.hash(state);
                name.hash(state);
            }
        }
    }
}
