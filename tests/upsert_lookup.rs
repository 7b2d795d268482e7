use passkeep::error::{LoadError, UpsertError};
use passkeep::{lookup, CredentialStore, Gatekeeper};

const KEY: &[u8; 32] = b"a sequence of random words here!";

#[test]
fn test_canonical_key_overwrites_instead_of_duplicating() {
    let dir = tempfile::tempdir().unwrap();
    let key = Gatekeeper::new(dir.path().join("hash")).setup(KEY, KEY).unwrap();
    let store = CredentialStore::new(dir.path().join("data.txt"));

    // "Example.com" and "example.com" normalize to the same key.
    store.upsert(&key, "Example.com", "a@b.com", "old").unwrap();
    store.upsert(&key, "example.com", "a@b.com", "new").unwrap();

    let records = store.load(&key).unwrap();
    assert_eq!(records.len(), 1, "duplicate record for the same website");
    assert_eq!(records["Example.com"].password, "new");
}

#[test]
fn test_empty_field_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let key = Gatekeeper::new(dir.path().join("hash")).setup(KEY, KEY).unwrap();
    let store = CredentialStore::new(dir.path().join("data.txt"));

    store.upsert(&key, "mail.com", "a@b.com", "pw1").unwrap();
    let before = store.load(&key).unwrap();

    let result = store.upsert(&key, "mail.com", "", "pw2");
    assert!(matches!(result, Err(UpsertError::EmptyField)));

    // No partial save occurred.
    assert_eq!(store.load(&key).unwrap(), before);
}

#[test]
fn test_find_distinguishes_missing_file_from_missing_record() {
    let dir = tempfile::tempdir().unwrap();
    let key = Gatekeeper::new(dir.path().join("hash")).setup(KEY, KEY).unwrap();
    let store = CredentialStore::new(dir.path().join("data.txt"));

    // 1. No blob at all: NotFound propagates.
    assert!(matches!(
        lookup::find(&store, &key, "mail.com"),
        Err(LoadError::NotFound)
    ));

    // 2. Blob exists but has no entry for this website: Ok(None).
    store.upsert(&key, "other.com", "a@b.com", "pw").unwrap();
    assert_eq!(lookup::find(&store, &key, "mail.com").unwrap(), None);
}

#[test]
fn test_mixed_internal_casing_keys_stay_distinct() {
    let dir = tempfile::tempdir().unwrap();
    let key = Gatekeeper::new(dir.path().join("hash")).setup(KEY, KEY).unwrap();
    let store = CredentialStore::new(dir.path().join("data.txt"));

    // Only the first character is normalized; these are different keys.
    store.upsert(&key, "myBank", "a@b.com", "pw1").unwrap();
    store.upsert(&key, "mybank", "a@b.com", "pw2").unwrap();

    assert_eq!(store.load(&key).unwrap().len(), 2);
    assert_eq!(
        lookup::find(&store, &key, "myBank").unwrap().unwrap().password,
        "pw1"
    );
    assert_eq!(
        lookup::find(&store, &key, "mybank").unwrap().unwrap().password,
        "pw2"
    );
}

#[test]
fn test_fresh_environment_end_to_end() {
    // The full first-run scenario: no artifacts, setup, add, search.
    let dir = tempfile::tempdir().unwrap();
    let gate = Gatekeeper::new(dir.path().join("hashed_key.txt"));
    let store = CredentialStore::new(dir.path().join("data.txt"));

    // 1. Fresh environment.
    assert!(!gate.is_initialized());

    // 2. Set up the passphrase.
    let key = gate.setup(KEY, KEY).unwrap();

    // 3. Add a credential.
    store.upsert(&key, "mail.com", "a@b.com", "pw1").unwrap();

    // 4. Search retrieves exactly what was stored.
    let found = lookup::find(&store, &key, "mail.com").unwrap().unwrap();
    assert_eq!(found.email, "a@b.com");
    assert_eq!(found.password, "pw1");
}
