//! Read-only search over the credential store.

use crate::error::LoadError;
use crate::key::AuthorizationKey;
use crate::store::{canonical_website_key, Credential, CredentialStore};

/// Look up the stored record for a website.
///
/// The website is normalized to its canonical key form before the search.
/// Returns `Ok(None)` when the store exists but holds no entry for that key.
/// A missing blob propagates as `NotFound` — the caller distinguishes "no
/// data file yet" from "no record for this website".
pub fn find(
    store: &CredentialStore,
    key: &AuthorizationKey,
    website: &str,
) -> Result<Option<Credential>, LoadError> {
    let mut records = store.load(key)?;
    Ok(records.remove(&canonical_website_key(website)))
}
