/// Unit tests for Key type methods
/// These tests pin display names plus the equality and hashing contract

use bindery::Key;
use std::any::TypeId;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(key: &Key) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_key_display_name_type() {
    let key = Key::of::<String>();
    assert_eq!(key.display_name(), "alloc::string::String");

    // Verify it's not empty or some default value
    assert!(!key.display_name().is_empty());
    assert_ne!(key.display_name(), "xyzzy");
}

#[test]
fn test_key_display_name_name() {
    let key = Key::name("database_port");
    assert_eq!(key.display_name(), "database_port");

    assert!(!key.display_name().is_empty());
    assert_ne!(key.display_name(), "xyzzy");
}

#[test]
fn test_key_from_str() {
    let key: Key = "greeting".into();
    assert_eq!(key, Key::name("greeting"));
    assert_eq!(key.display_name(), "greeting");
}

#[test]
fn test_type_keys_equal_by_type_id() {
    let a = Key::of::<u32>();
    let b = Key::of::<u32>();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    // The diagnostic name does not participate in equality
    let renamed = Key::Type(TypeId::of::<u32>(), "something-else");
    assert_eq!(a, renamed);
    assert_eq!(hash_of(&a), hash_of(&renamed));
}

#[test]
fn test_distinct_types_are_distinct_keys() {
    assert_ne!(Key::of::<u32>(), Key::of::<u64>());
    assert_ne!(Key::of::<String>(), Key::of::<&'static str>());
}

#[test]
fn test_name_keys_equal_by_string() {
    assert_eq!(Key::name("db"), Key::name("db"));
    assert_eq!(hash_of(&Key::name("db")), hash_of(&Key::name("db")));
    assert_ne!(Key::name("db"), Key::name("cache"));
}

#[test]
fn test_type_key_never_equals_name_key() {
    // Even when the name key spells out the type's path
    let type_key = Key::of::<String>();
    let name_key = Key::name("alloc::string::String");
    assert_ne!(type_key, name_key);
}

#[test]
fn test_key_clone_preserves_identity() {
    let key = Key::of::<Vec<u8>>();
    let cloned = key.clone();
    assert_eq!(key, cloned);
    assert_eq!(key.display_name(), cloned.display_name());
    assert_eq!(hash_of(&key), hash_of(&cloned));
}

#[test]
fn test_keys_work_as_hashmap_keys() {
    let mut map = std::collections::HashMap::new();
    map.insert(Key::of::<u32>(), 1);
    map.insert(Key::name("u32"), 2);

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&Key::of::<u32>()), Some(&1));
    assert_eq!(map.get(&Key::name("u32")), Some(&2));
    assert_eq!(map.get(&Key::of::<u64>()), None);
}
