//! Error types for passkeep.
//!
//! Each store-facing operation has its own error enum so the GUI collaborator
//! can match on exactly the failure modes that operation produces. Error
//! messages are intentionally minimal — they signal *what* failed without
//! revealing *why* in ways that could leak cryptographic state.

use std::fmt;
use std::io;

/// Failures during first-run key setup.
#[derive(Debug)]
pub enum SetupError {
    /// The candidate key and its confirmation do not match.
    Mismatch,

    /// The candidate key is not exactly 32 bytes long.
    InvalidLength,

    /// The hash artifact could not be written, or the randomness source
    /// failed while generating the salt.
    Io(io::Error),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch => write!(f, "keys do not match"),
            Self::InvalidLength => write!(f, "key must be exactly 32 bytes"),
            Self::Io(e) => write!(f, "could not write key hash: {}", e),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Failures during key verification at startup.
#[derive(Debug)]
pub enum VerifyError {
    /// No stored key hash exists; setup has never completed.
    NotInitialized,

    /// The candidate key does not match the stored hash.
    WrongKey,

    /// The stored hash artifact exists but could not be parsed. All store
    /// access must stay blocked until the user resolves this state.
    CorruptHash,

    /// The hash artifact exists but could not be read.
    Io(io::Error),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "no key has been set up"),
            Self::WrongKey => write!(f, "incorrect key"),
            Self::CorruptHash => write!(f, "stored key hash is unreadable"),
            Self::Io(e) => write!(f, "could not read key hash: {}", e),
        }
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Failures while loading the credential blob.
#[derive(Debug)]
pub enum LoadError {
    /// No blob exists yet. Callers treat this as "nothing saved yet",
    /// not as a hard error.
    NotFound,

    /// The blob could not be decrypted or deserialized: wrong key, tampered
    /// ciphertext, or non-UTF-8 content after decryption.
    DecryptionFailed,

    /// The blob exists but could not be read.
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no data file found"),
            Self::DecryptionFailed => write!(f, "decryption failed"),
            Self::Io(e) => write!(f, "could not read data file: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Failures while saving the credential blob.
#[derive(Debug)]
pub enum SaveError {
    /// The credential set could not be serialized.
    Serialization,

    /// The underlying AEAD operation failed.
    EncryptionFailed,

    /// The blob could not be written.
    Io(io::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization => write!(f, "serialization failed"),
            Self::EncryptionFailed => write!(f, "encryption failed"),
            Self::Io(e) => write!(f, "could not write data file: {}", e),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Failures while inserting or updating a credential record.
#[derive(Debug)]
pub enum UpsertError {
    /// One or more of website, email, or password is empty. No partial
    /// save occurs.
    EmptyField,

    /// The existing set could not be loaded. A missing blob is not an
    /// error here — upsert starts from an empty set in that case.
    Load(LoadError),

    /// The merged set could not be saved.
    Save(SaveError),
}

impl fmt::Display for UpsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "one or more fields are empty"),
            Self::Load(e) => write!(f, "{}", e),
            Self::Save(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for UpsertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyField => None,
            Self::Load(e) => Some(e),
            Self::Save(e) => Some(e),
        }
    }
}

impl From<LoadError> for UpsertError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<SaveError> for UpsertError {
    fn from(e: SaveError) -> Self {
        Self::Save(e)
    }
}
