use super::*;
use crate::kernel::services::ports::store::StoreError;
use tempfile::tempdir;

#[test]
fn memory_store_overwrites_values() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("pythonCachedCode"), None);

    store.set("pythonCachedCode", "print(1)").unwrap();
    store.set("pythonCachedCode", "print(2)").unwrap();
    assert_eq!(store.get("pythonCachedCode").as_deref(), Some("print(2)"));
    assert_eq!(store.len(), 1);
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state").join("store.json");

    {
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("lang"), None);
        store.set("lang", "java").unwrap();
        store.set("javaCachedCode", "class Main {}\n").unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.get("lang").as_deref(), Some("java"));
    assert_eq!(store.get("javaCachedCode").as_deref(), Some("class Main {}\n"));
}

#[test]
fn file_store_writes_through_and_skips_unchanged_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    let store = FileStore::open(&path).unwrap();

    store.set("pythonCachedCode", "x = 1\n").unwrap();
    let on_disk: BTreeMap<String, String> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.get("pythonCachedCode").map(String::as_str), Some("x = 1\n"));

    std::fs::remove_file(&path).unwrap();
    store.set("pythonCachedCode", "x = 1\n").unwrap();
    assert!(!path.exists());

    store.set("pythonCachedCode", "x = 2\n").unwrap();
    assert!(path.exists());
}

#[test]
fn file_store_treats_blank_file_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "  \n").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("lang"), None);
}

#[test]
fn file_store_rejects_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[1, 2").unwrap();

    assert!(matches!(FileStore::open(&path), Err(StoreError::Json(_))));
}
