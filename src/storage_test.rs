use super::*;

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    assert_eq!(store.get_item("missing").unwrap(), None);
}

#[test]
fn memory_storage_set_overwrites() {
    let store = MemoryStorage::new();
    store.set_item("k", "one").unwrap();
    store.set_item("k", "two").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_absent_is_ok() {
    let store = MemoryStorage::new();
    store.remove_item("never-set").unwrap();
    store.set_item("k", "v").unwrap();
    store.remove_item("k").unwrap();
    store.remove_item("k").unwrap();
    assert!(store.is_empty());
}
