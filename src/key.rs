//! Key setup, verification, and ownership.
//!
//! This module owns the lifecycle of the authorization key:
//! 1. First run: `Gatekeeper::setup` hashes the passphrase with a random salt
//!    and persists the hash, returning the live key.
//! 2. Every later run: `Gatekeeper::verify` compares a candidate against the
//!    stored hash and returns the live key on success.
//!
//! The passphrase itself is never written to disk. Its bytes double as the
//! AES-256 key for the credential blob, which couples authentication and
//! encryption into one secret: losing the passphrase makes the stored
//! records permanently unrecoverable. That coupling is deliberate and is
//! part of the observable contract of this crate.
//!
//! ## Stored hash artifact
//!
//! One line of text:
//!
//! ```text
//! PBKDF2-SHA256$<iterations>$<salt base64>$<hash base64>
//! ```
//!
//! Presence of this file is what "initialized" means. It is written exactly
//! once, at setup time.

use std::fs;
use std::io::{self, ErrorKind};
use std::num::NonZeroU32;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{self, KEY_LEN};
use crate::error::{SetupError, VerifyError};

/// Scheme tag written as the first field of the hash artifact.
const HASH_SCHEME: &str = "PBKDF2-SHA256";

// ---------------------------------------------------------------------------
// Authorization key
// ---------------------------------------------------------------------------

/// The single secret gating the credential store.
///
/// Exactly 32 bytes: the user's passphrase, used directly as the AES-256 key.
///
/// - Not `Clone`. The GUI collaborator holds one instance per session and
///   passes it by reference into every store operation.
/// - Zeroized on drop. Memory is overwritten before deallocation.
/// - Raw bytes never leave the crate; `as_bytes` is `pub(crate)`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct AuthorizationKey {
    bytes: [u8; KEY_LEN],
}

impl AuthorizationKey {
    /// Construct a key from raw bytes. Only the gatekeeper produces keys.
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Borrow the raw key bytes for use in encrypt/decrypt operations.
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

// ---------------------------------------------------------------------------
// Gatekeeper
// ---------------------------------------------------------------------------

/// Gates access to the credential store behind a single shared passphrase.
///
/// Bound to the path of the stored hash artifact. Holds no key material
/// itself — keys are returned to the caller and live in its session state.
pub struct Gatekeeper {
    hash_path: PathBuf,
}

impl Gatekeeper {
    /// Create a gatekeeper operating on the given hash-artifact path.
    pub fn new(hash_path: impl Into<PathBuf>) -> Self {
        Self {
            hash_path: hash_path.into(),
        }
    }

    /// Whether a stored key hash exists.
    ///
    /// `true` means setup has already run and `verify` is required before
    /// any record access; `false` means this is a first run.
    pub fn is_initialized(&self) -> bool {
        self.hash_path.exists()
    }

    /// First-run key setup.
    ///
    /// Checks that `candidate` matches `confirmation` and is exactly 32
    /// bytes, then hashes it with a fresh random salt, persists the hash,
    /// and returns the live key. Nothing is written on failure.
    pub fn setup(
        &self,
        candidate: &[u8],
        confirmation: &[u8],
    ) -> Result<AuthorizationKey, SetupError> {
        if candidate != confirmation {
            return Err(SetupError::Mismatch);
        }
        let bytes: [u8; KEY_LEN] = candidate
            .try_into()
            .map_err(|_| SetupError::InvalidLength)?;

        let salt = crypto::generate_salt()
            .map_err(|_| SetupError::Io(io::Error::new(ErrorKind::Other, "randomness source failed")))?;
        let hash = crypto::hash_passphrase(candidate, &salt);

        let line = format!(
            "{}${}${}${}\n",
            HASH_SCHEME,
            crypto::PBKDF2_ITERATIONS,
            BASE64.encode(salt),
            BASE64.encode(hash),
        );
        fs::write(&self.hash_path, line).map_err(SetupError::Io)?;

        Ok(AuthorizationKey::from_bytes(bytes))
    }

    /// Verify a candidate key against the stored hash.
    ///
    /// The hash comparison runs in constant time. On success the candidate
    /// becomes the live key for this session.
    pub fn verify(&self, candidate: &[u8]) -> Result<AuthorizationKey, VerifyError> {
        let stored = match fs::read_to_string(&self.hash_path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(VerifyError::NotInitialized),
            Err(e) => return Err(VerifyError::Io(e)),
        };

        let (iterations, salt, hash) = parse_hash_line(stored.trim())?;
        if !crypto::verify_passphrase(candidate, &salt, iterations, &hash) {
            return Err(VerifyError::WrongKey);
        }

        // A successful verification implies the candidate has the same bytes
        // as the 32-byte key hashed at setup, so this conversion holds.
        let bytes: [u8; KEY_LEN] = candidate.try_into().map_err(|_| VerifyError::WrongKey)?;
        Ok(AuthorizationKey::from_bytes(bytes))
    }
}

/// Parse the stored artifact line into (iterations, salt, hash).
///
/// Any malformation maps to `CorruptHash`: the GUI must block store access
/// until the user resolves the artifact, since no key can verify against it.
fn parse_hash_line(line: &str) -> Result<(NonZeroU32, Vec<u8>, Vec<u8>), VerifyError> {
    let mut fields = line.split('$');
    let scheme = fields.next().ok_or(VerifyError::CorruptHash)?;
    let iterations = fields.next().ok_or(VerifyError::CorruptHash)?;
    let salt = fields.next().ok_or(VerifyError::CorruptHash)?;
    let hash = fields.next().ok_or(VerifyError::CorruptHash)?;
    if scheme != HASH_SCHEME || fields.next().is_some() {
        return Err(VerifyError::CorruptHash);
    }

    let iterations = iterations
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(VerifyError::CorruptHash)?;
    let salt = BASE64.decode(salt).map_err(|_| VerifyError::CorruptHash)?;
    let hash = BASE64.decode(hash).map_err(|_| VerifyError::CorruptHash)?;

    Ok((iterations, salt, hash))
}
