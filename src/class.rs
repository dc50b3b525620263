//! Class-construction recipes and constructor auto-discovery.

use std::fmt;

use crate::container::Container;
use crate::error::DiResult;
use crate::signature::{Args, Signature};

/// Types that can construct themselves from the container.
///
/// This is the static stand-in for reflective constructor discovery: the
/// type itself declares how its dependencies are resolved. Implementing it
/// makes `T` usable with [`Container::bind_class`] and lets
/// [`Container::get_auto`] fall back to constructing unregistered keys.
///
/// # Examples
///
/// ```rust
/// use bindery::{Container, DiResult, Injectable};
/// use std::sync::Arc;
///
/// struct Config { url: String }
///
/// struct Client { config: Arc<Config> }
///
/// impl Injectable for Client {
///     fn inject(container: &Container) -> DiResult<Self> {
///         Ok(Client { config: container.get::<Config>()? })
///     }
/// }
///
/// let container = Container::new();
/// container.bind_value(bindery::Key::of::<Config>(), Config {
///     url: "postgres://localhost".to_string(),
/// }).unwrap();
///
/// // Never registered, constructed on the fly
/// let client = container.get_auto::<Client>().unwrap();
/// assert_eq!(client.config.url, "postgres://localhost");
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container.
    fn inject(container: &Container) -> DiResult<Self>;
}

type CtorFn<T> = Box<dyn Fn(&mut Args) -> DiResult<T> + Send + Sync>;
type MethodFn<T> = Box<dyn Fn(&mut T, &mut Args) -> DiResult<()> + Send + Sync>;

struct MethodDef<T> {
    name: &'static str,
    signature: Signature,
    invoke: MethodFn<T>,
}

/// Construction recipe for a class binding.
///
/// Holds the construction entry (signature plus constructor closure) and
/// an ordered list of post-construction method entries. Build is a
/// two-phase sequence: CONSTRUCT resolves the constructor signature and
/// instantiates; CONFIGURE then runs every method entry in definition
/// order, resolving its signature and invoking it on the fresh instance.
/// A CONSTRUCT failure aborts before any CONFIGURE step; a CONFIGURE
/// failure discards the partially configured instance, which never
/// escapes the failed resolution.
///
/// # Examples
///
/// ```rust
/// use bindery::{ClassDefinition, Container, Key, Signature};
/// use std::sync::Arc;
///
/// #[derive(Default)]
/// struct Service {
///     greeting: Option<Arc<String>>,
/// }
///
/// let definition = ClassDefinition::no_args(Service::default).method(
///     "set_greeting",
///     Signature::new().keyed("greeting", "greeting"),
///     |service, args| {
///         service.greeting = Some(args.take::<String>()?);
///         Ok(())
///     },
/// );
///
/// let container = Container::new();
/// container.bind_value("greeting", "hello".to_string()).unwrap();
/// container.bind_class_with("service", definition).unwrap();
///
/// let service = container.get_named::<Service>("service").unwrap();
/// assert_eq!(&**service.greeting.as_ref().unwrap(), "hello");
/// ```
pub struct ClassDefinition<T> {
    ctor_signature: Signature,
    ctor: CtorFn<T>,
    methods: Vec<MethodDef<T>>,
}

impl<T: Send + Sync + 'static> ClassDefinition<T> {
    /// A recipe with the given constructor signature and closure.
    pub fn new<F>(signature: Signature, ctor: F) -> Self
    where
        F: Fn(&mut Args) -> DiResult<T> + Send + Sync + 'static,
    {
        Self {
            ctor_signature: signature,
            ctor: Box::new(ctor),
            methods: Vec::new(),
        }
    }

    /// A recipe with an empty construction dependency list.
    pub fn no_args<F>(ctor: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::new(Signature::new(), move |_| Ok(ctor()))
    }

    /// Appends a post-construction method entry.
    ///
    /// Methods run after construction in the order they were appended.
    pub fn method<F>(mut self, name: &'static str, signature: Signature, invoke: F) -> Self
    where
        F: Fn(&mut T, &mut Args) -> DiResult<()> + Send + Sync + 'static,
    {
        self.methods.push(MethodDef {
            name,
            signature,
            invoke: Box::new(invoke),
        });
        self
    }

    pub(crate) fn instantiate(&self, container: &Container) -> DiResult<T> {
        // CONSTRUCT
        let mut args = self.ctor_signature.resolve(container)?;
        let mut instance = (self.ctor)(&mut args)?;

        // CONFIGURE, in definition order
        for method in &self.methods {
            let mut args = method.signature.resolve(container)?;
            (method.invoke)(&mut instance, &mut args)?;
        }

        Ok(instance)
    }
}

impl<T> fmt::Debug for ClassDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDefinition")
            .field("class", &std::any::type_name::<T>())
            .field("ctor_params", &self.ctor_signature.len())
            .field(
                "methods",
                &self.methods.iter().map(|m| m.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
