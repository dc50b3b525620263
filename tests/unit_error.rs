/// Unit tests for DiError and DiResult types
/// These tests pin the exact error message text surfaced to callers

use bindery::{DiError, DiResult};
use std::error::Error;

#[test]
fn test_error_display_invalid_key() {
    let error = DiError::InvalidKey("");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "'' is not a valid key");

    assert!(display_str.contains("not a valid key"));
}

#[test]
fn test_error_display_duplicate_key() {
    let error = DiError::DuplicateKey("database");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Resource 'database' was already declared");

    assert!(display_str.contains("database"));
    assert!(display_str.contains("already declared"));
}

#[test]
fn test_error_display_undeclared_resource() {
    let error = DiError::UndeclaredResource("cache");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Undeclared resource 'cache'");

    assert!(display_str.contains("cache"));
    assert!(display_str.contains("Undeclared"));
}

#[test]
fn test_error_display_missing_type_hint() {
    let error = DiError::MissingTypeHint("second_param");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Parameter 'second_param' is missing a type hint");

    assert!(display_str.contains("second_param"));
    assert!(display_str.contains("missing a type hint"));
}

#[test]
fn test_error_display_unresolvable_dependency() {
    let error = DiError::UnresolvableDependency("logger");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Unresolvable dependency: logger");

    assert!(display_str.contains("logger"));
}

#[test]
fn test_error_display_type_mismatch() {
    let error = DiError::TypeMismatch("alloc::string::String");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Type mismatch for: alloc::string::String");

    assert!(display_str.contains("alloc::string::String"));
    assert!(display_str.contains("mismatch"));
}

#[test]
fn test_error_display_circular() {
    let path = vec!["ServiceA", "ServiceB", "ServiceA"];
    let error = DiError::Circular(path);
    let display_str = format!("{}", error);
    assert_eq!(
        display_str,
        "Circular dependency: ServiceA -> ServiceB -> ServiceA"
    );

    assert!(display_str.contains("ServiceA -> ServiceB -> ServiceA"));
    assert!(display_str.contains("Circular dependency"));
}

#[test]
fn test_error_display_empty_circular_path() {
    let error = DiError::Circular(vec![]);
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Circular dependency: ");

    // Should still show the prefix even with empty path
    assert!(display_str.contains("Circular dependency"));
}

#[test]
fn test_error_display_depth_exceeded() {
    let error = DiError::DepthExceeded(1024);
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Max depth 1024 exceeded");

    assert!(display_str.contains("1024"));
    assert!(display_str.contains("exceeded"));
}

#[test]
fn test_error_is_std_error() {
    let error = DiError::UndeclaredResource("x");
    let boxed: Box<dyn Error> = Box::new(error);
    assert_eq!(boxed.to_string(), "Undeclared resource 'x'");
    assert!(boxed.source().is_none());
}

#[test]
fn test_error_clone_and_eq() {
    let error = DiError::Circular(vec!["a", "b", "a"]);
    let cloned = error.clone();
    assert_eq!(error, cloned);

    assert_ne!(
        DiError::UndeclaredResource("x"),
        DiError::DuplicateKey("x")
    );
    assert_ne!(
        DiError::UndeclaredResource("x"),
        DiError::UndeclaredResource("y")
    );
}

#[test]
fn test_diresult_ok() {
    let result: DiResult<String> = Ok("success".to_string());
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");
}

#[test]
fn test_diresult_err() {
    let result: DiResult<String> = Err(DiError::UndeclaredResource("missing"));
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().to_string(),
        "Undeclared resource 'missing'"
    );
}

#[test]
fn test_diresult_question_mark_propagation() {
    fn inner() -> DiResult<u32> {
        Err(DiError::DepthExceeded(5))
    }

    fn outer() -> DiResult<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert_eq!(outer(), Err(DiError::DepthExceeded(5)));
}
