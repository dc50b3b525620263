//! # bindery
//!
//! Small dependency injection container for Rust that can also double as
//! a service locator. Or maybe the opposite.
//!
//! ## Features
//!
//! - **Explicit bindings**: value, factory, and class-construction
//!   recipes chosen at registration time, never inferred from a value's
//!   runtime shape
//! - **String and type keys**: bind against opaque names or against a
//!   type used as its own key
//! - **Lifecycle scopes**: Dependent (rebuild every time) and Singleton
//!   (build once, cache forever) with per-binding cache slots
//! - **Re-entrant resolution**: declared factory/constructor parameters
//!   are supplied by nested lookups into the same container
//! - **Circular dependency detection**: re-entry fails with the full
//!   dependency path instead of exhausting the stack
//!
//! ## Quick Start
//!
//! ```rust
//! use bindery::{Container, Key, ScopeKind, Signature};
//! use std::sync::Arc;
//!
//! struct Database {
//!     connection_string: String,
//! }
//!
//! struct UserService {
//!     db: Arc<Database>,
//! }
//!
//! let container = Container::new();
//! container
//!     .bind_value_in(
//!         Key::of::<Database>(),
//!         Database { connection_string: "postgres://localhost".to_string() },
//!         ScopeKind::Singleton,
//!     )
//!     .unwrap()
//!     .bind_factory::<UserService, _>(
//!         Key::of::<UserService>(),
//!         Signature::new().dep::<Database>("db"),
//!         |args| Ok(UserService { db: args.take::<Database>()? }),
//!     )
//!     .unwrap();
//!
//! let service = container.get::<UserService>().unwrap();
//! assert_eq!(service.db.connection_string, "postgres://localhost");
//! ```
//!
//! ## Scopes
//!
//! - **Dependent** (the initial default): every `get` builds a fresh
//!   instance
//! - **Singleton**: the first `get` builds and caches; every later `get`
//!   returns the same instance
//!
//! The default can be switched with
//! [`Container::set_default_scope`]; already-registered bindings keep
//! the scope they were registered with.
//!
//! ## Constructor injection
//!
//! Types implementing [`Injectable`] can be bound as classes or resolved
//! without any registration at all:
//!
//! ```rust
//! use bindery::{Container, DiResult, Injectable};
//!
//! struct Greeter;
//!
//! impl Injectable for Greeter {
//!     fn inject(_container: &Container) -> DiResult<Self> {
//!         Ok(Greeter)
//!     }
//! }
//!
//! let container = Container::new();
//! let greeter = container.get_auto::<Greeter>().unwrap();
//! # let _ = greeter;
//! ```

// Module declarations
pub mod binding;
pub mod class;
pub mod container;
pub mod error;
pub mod key;
pub mod observer;
pub mod scope;
pub mod signature;

// Internal modules
mod internal;

// Re-export core types
pub use binding::{Binding, ClassBinding, FactoryBinding};
pub use class::{ClassDefinition, Injectable};
pub use container::Container;
pub use error::{DiError, DiResult};
pub use key::Key;
pub use observer::{DiObserver, LoggingObserver};
pub use scope::ScopeKind;
pub use signature::{Args, ParamSpec, Signature};
