//! Encrypted-at-rest persistence of credential records.
//!
//! The store is a pure data-access layer: every operation runs a full
//! load-decrypt / mutate / encrypt-save cycle against the blob on disk.
//! Nothing is cached in memory across operations, and the store never holds
//! key material — the caller passes its [`AuthorizationKey`] into every call.
//!
//! The plaintext form of the blob is the JSON serialization of an ordered
//! map, so serializing the same set always yields the same bytes. The blob
//! itself is that JSON sealed with AES-256-GCM; a wrong key or a tampered
//! file fails the authentication check rather than yielding garbage records.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::crypto;
use crate::error::{LoadError, SaveError, UpsertError};
use crate::key::AuthorizationKey;

/// One stored credential: the email/username and password for a website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

/// The full record set, keyed by canonical website key.
///
/// An ordered map: iteration and serialization order is deterministic, which
/// makes the JSON plaintext canonical. Website keys are unique by
/// construction; insertion order is irrelevant.
pub type CredentialSet = BTreeMap<String, Credential>;

/// Normalize a website string to its canonical key form.
///
/// The first character is uppercased and the remainder is left unchanged.
/// This is deliberately not a full case-fold: `"myBank"` and `"mybank"`
/// normalize to `"MyBank"` and `"Mybank"` and stay distinct keys. The rule
/// is preserved from the original manager because it is observable behavior.
pub fn canonical_website_key(website: &str) -> String {
    let mut chars = website.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Durable, encrypted-at-rest storage for the credential set.
///
/// Bound to the path of the credential blob. Absence of the blob means
/// "nothing saved yet"; every save fully rewrites it.
pub struct CredentialStore {
    blob_path: PathBuf,
}

impl CredentialStore {
    /// Create a store operating on the given blob path.
    pub fn new(blob_path: impl Into<PathBuf>) -> Self {
        Self {
            blob_path: blob_path.into(),
        }
    }

    /// Load and decrypt the credential set.
    ///
    /// Fails with `NotFound` if no blob exists yet — callers treat that as
    /// an empty set, not a hard error. Fails with `DecryptionFailed` if the
    /// blob cannot be opened under `key`: wrong key, tampered ciphertext, or
    /// plaintext that is not UTF-8 JSON.
    pub fn load(&self, key: &AuthorizationKey) -> Result<CredentialSet, LoadError> {
        let blob = match fs::read(&self.blob_path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadError::NotFound),
            Err(e) => return Err(LoadError::Io(e)),
        };

        let plaintext =
            crypto::decrypt(key.as_bytes(), &blob).map_err(|_| LoadError::DecryptionFailed)?;
        let json = String::from_utf8(plaintext).map_err(|_| LoadError::DecryptionFailed)?;
        serde_json::from_str(&json).map_err(|_| LoadError::DecryptionFailed)
    }

    /// Serialize, encrypt, and persist the credential set.
    ///
    /// The blob is written to a sibling temp file and renamed into place, so
    /// a failure mid-write leaves the previous blob intact.
    pub fn save(&self, key: &AuthorizationKey, records: &CredentialSet) -> Result<(), SaveError> {
        let json = serde_json::to_string(records).map_err(|_| SaveError::Serialization)?;
        let blob = crypto::encrypt(key.as_bytes(), json.as_bytes())
            .map_err(|_| SaveError::EncryptionFailed)?;

        let tmp_path = self.blob_path.with_extension("tmp");
        fs::write(&tmp_path, &blob).map_err(SaveError::Io)?;
        fs::rename(&tmp_path, &self.blob_path).map_err(SaveError::Io)?;
        Ok(())
    }

    /// Insert or update the record for a website.
    ///
    /// The website is normalized to its canonical key form and the email is
    /// lowercased. An existing record under the same canonical key is
    /// overwritten. Fails with `EmptyField` before touching the blob if any
    /// input is empty; a missing blob starts from an empty set, but an
    /// undecryptable one propagates rather than being silently replaced.
    pub fn upsert(
        &self,
        key: &AuthorizationKey,
        website: &str,
        email: &str,
        password: &str,
    ) -> Result<(), UpsertError> {
        if website.is_empty() || email.is_empty() || password.is_empty() {
            return Err(UpsertError::EmptyField);
        }

        let mut records = match self.load(key) {
            Ok(records) => records,
            Err(LoadError::NotFound) => CredentialSet::new(),
            Err(e) => return Err(e.into()),
        };

        records.insert(
            canonical_website_key(website),
            Credential {
                email: email.to_lowercase(),
                password: password.to_string(),
            },
        );

        self.save(key, &records)?;
        Ok(())
    }
}
