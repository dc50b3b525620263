use bindery::{Container, DiError, Key, Signature};
use std::sync::Arc;

#[test]
fn test_bind_value_then_factory() {
    let container = Container::new();
    container
        .bind_value("foo", "foo-1".to_string())
        .unwrap()
        .bind_factory::<String, _>("bar", Signature::new(), |_| Ok("bar-1".to_string()))
        .unwrap();

    assert_eq!(&*container.get_named::<String>("foo").unwrap(), "foo-1");
    assert_eq!(&*container.get_named::<String>("bar").unwrap(), "bar-1");
}

#[test]
fn test_bind_factory_then_value() {
    let container = Container::new();
    container
        .bind_factory::<String, _>("foo", Signature::new(), |_| Ok("foo-1".to_string()))
        .unwrap()
        .bind_value("bar", "bar-1".to_string())
        .unwrap();

    assert_eq!(&*container.get_named::<String>("foo").unwrap(), "foo-1");
    assert_eq!(&*container.get_named::<String>("bar").unwrap(), "bar-1");
}

#[test]
fn test_value_keeps_identity() {
    struct Config {
        port: u16,
    }

    let container = Container::new();
    container
        .bind_value(Key::of::<Config>(), Config { port: 8080 })
        .unwrap();

    let a = container.get::<Config>().unwrap();
    let b = container.get::<Config>().unwrap();

    assert_eq!(a.port, 8080);
    assert!(Arc::ptr_eq(&a, &b)); // Same value every time, even under Dependent
}

#[test]
fn test_callable_value_stays_literal() {
    // A function pointer registered through bind_value is a stored value,
    // never invoked as a factory.
    fn forty_two() -> u32 {
        42
    }

    let container = Container::new();
    container
        .bind_value("fn", forty_two as fn() -> u32)
        .unwrap();

    let stored = container.get_named::<fn() -> u32>("fn").unwrap();
    assert_eq!(stored(), 42);
}

#[test]
fn test_duplicate_key_any_combination() {
    let container = Container::new();
    container.bind_value("foo", 1u32).unwrap();

    let again_value = container.bind_value("foo", 2u32);
    assert_eq!(again_value.err(), Some(DiError::DuplicateKey("foo")));

    let again_factory =
        container.bind_factory::<u32, _>("foo", Signature::new(), |_| Ok(3u32));
    assert_eq!(again_factory.err(), Some(DiError::DuplicateKey("foo")));

    // The original binding is untouched
    assert_eq!(*container.get_named::<u32>("foo").unwrap(), 1);
}

#[test]
fn test_duplicate_type_key() {
    struct Marker;

    let container = Container::new();
    container.bind_value(Key::of::<Marker>(), Marker).unwrap();
    let again = container.bind_value(Key::of::<Marker>(), Marker);
    assert!(matches!(again.err(), Some(DiError::DuplicateKey(_))));
}

#[test]
fn test_undeclared_resource() {
    let container = Container::new();
    let result = container.get_named::<u32>("missing");
    assert_eq!(result.err(), Some(DiError::UndeclaredResource("missing")));

    struct Unregistered;
    assert!(matches!(
        container.get::<Unregistered>().err(),
        Some(DiError::UndeclaredResource(_))
    ));
}

#[test]
fn test_empty_name_key_rejected() {
    let container = Container::new();
    assert_eq!(
        container.bind_value("", 1u8).err(),
        Some(DiError::InvalidKey(""))
    );
}

#[test]
fn test_named_downcast_mismatch() {
    let container = Container::new();
    container.bind_value("port", 8080u16).unwrap();

    assert!(matches!(
        container.get_named::<String>("port").err(),
        Some(DiError::TypeMismatch(_))
    ));
}

#[test]
fn test_contains() {
    let container = Container::new();
    container.bind_value("foo", 1u32).unwrap();

    assert!(container.contains("foo"));
    assert!(!container.contains("bar"));
}

#[test]
fn test_end_to_end_greeting_shout() {
    let container = Container::new();
    container
        .bind_value("greeting", "hello".to_string())
        .unwrap()
        .bind_factory::<String, _>(
            "shout",
            Signature::new().keyed("greeting", "greeting"),
            |args| Ok(format!("{}!", args.take::<String>()?)),
        )
        .unwrap();

    assert_eq!(&*container.get_named::<String>("shout").unwrap(), "hello!");
}

#[test]
fn test_complex_dependency_graph() {
    struct A {
        value: i32,
    }

    struct B {
        a: Arc<A>,
    }

    struct C {
        a: Arc<A>,
        b: Arc<B>,
    }

    let container = Container::new();

    container
        .bind_value(Key::of::<A>(), A { value: 100 })
        .unwrap()
        .bind_factory::<B, _>(
            Key::of::<B>(),
            Signature::new().dep::<A>("a"),
            |args| Ok(B { a: args.take::<A>()? }),
        )
        .unwrap()
        .bind_factory::<C, _>(
            Key::of::<C>(),
            Signature::new().dep::<A>("a").dep::<B>("b"),
            |args| {
                Ok(C {
                    a: args.take::<A>()?,
                    b: args.take::<B>()?,
                })
            },
        )
        .unwrap();

    let c = container.get::<C>().unwrap();

    assert_eq!(c.a.value, 100);
    assert_eq!(c.b.a.value, 100);
    // A is a stored value, so it keeps its identity everywhere
    assert!(Arc::ptr_eq(&c.a, &c.b.a));
}
