use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("token"), None);

    storage.set("token", "t1");
    assert_eq!(storage.get("token").as_deref(), Some("t1"));

    storage.set("token", "t2");
    assert_eq!(storage.get("token").as_deref(), Some("t2"));
    assert_eq!(storage.len(), 1);

    storage.remove("token");
    assert_eq!(storage.get("token"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::with_entries([("user", "null")]);
    storage.remove("token");
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("token", "shared");
    assert_eq!(b.get("token").as_deref(), Some("shared"));
}

// =============================================================
// BrowserStorage (host build)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_without_window() {
    let storage = BrowserStorage;
    storage.set("token", "t1");
    assert_eq!(storage.get("token"), None);
    storage.remove("token");
}

#[test]
fn report_failure_flags_failed_writes_and_removes() {
    assert!(report_failure::<&str>("write", "token", Ok(())));
    assert!(!report_failure("write", "token", Err("QuotaExceededError")));
    assert!(!report_failure("remove", "user", Err("SecurityError")));
}
