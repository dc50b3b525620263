//! Error types for the dependency injection container.

use std::fmt;

/// Dependency injection errors
///
/// Represents the various error conditions that can occur during binding
/// registration or resolution. Every failure aborts the whole `get` call
/// chain immediately; nothing is retried and nothing is partially cached
/// for the failing key.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, DiError};
///
/// let container = Container::new();
/// match container.get::<String>() {
///     Err(DiError::UndeclaredResource(name)) => {
///         assert_eq!(name, "alloc::string::String");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiError {
    /// Key is not usable as a registry key (e.g. an empty name)
    InvalidKey(&'static str),
    /// Key already registered; keys are immutable once present
    DuplicateKey(&'static str),
    /// `get` called on a key with no binding
    UndeclaredResource(&'static str),
    /// A signature declared a second parameter without a key hint
    /// (only the first hint-less parameter may receive the container)
    MissingTypeHint(&'static str),
    /// A factory or constructor consumed more arguments than its
    /// signature declared
    UnresolvableDependency(&'static str),
    /// Type downcast failed while consuming a resolved argument
    TypeMismatch(&'static str),
    /// Circular dependency detected (includes path)
    Circular(Vec<&'static str>),
    /// Maximum recursion depth exceeded
    DepthExceeded(usize),
}

impl fmt::Display for DiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiError::InvalidKey(name) => write!(f, "'{}' is not a valid key", name),
            DiError::DuplicateKey(name) => write!(f, "Resource '{}' was already declared", name),
            DiError::UndeclaredResource(name) => write!(f, "Undeclared resource '{}'", name),
            DiError::MissingTypeHint(param) => {
                write!(f, "Parameter '{}' is missing a type hint", param)
            }
            DiError::UnresolvableDependency(name) => {
                write!(f, "Unresolvable dependency: {}", name)
            }
            DiError::TypeMismatch(name) => write!(f, "Type mismatch for: {}", name),
            DiError::Circular(path) => {
                write!(f, "Circular dependency: {}", path.join(" -> "))
            }
            DiError::DepthExceeded(depth) => write!(f, "Max depth {} exceeded", depth),
        }
    }
}

impl std::error::Error for DiError {}

/// Result type for DI operations
///
/// A convenience alias for `Result<T, DiError>` used throughout bindery.
pub type DiResult<T> = Result<T, DiError>;
