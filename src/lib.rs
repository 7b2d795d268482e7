//! # passkeep
//!
//! Encrypted-at-rest credential storage gated by a single passphrase-derived
//! key. This is the core of a desktop password manager; the GUI is an
//! external collaborator that calls into this crate in response to user
//! actions.
//!
//! ## Architecture
//!
//! - [`Gatekeeper`] runs once at startup: first-run setup persists a salted
//!   hash of a 32-byte passphrase, later runs verify a candidate against it.
//!   The verified passphrase bytes *are* the AES-256 key — authentication
//!   and encryption share one secret, so a lost passphrase means the stored
//!   records are permanently unrecoverable. There is no recovery mechanism.
//! - [`CredentialStore`] persists a website → `{email, password}` map as a
//!   single authenticated-encrypted blob, fully re-read and re-written on
//!   every operation.
//! - [`generate_password`] synthesizes one random credential per call.
//! - [`lookup::find`] is the read-only search over the store.
//!
//! The model is single-user, single-process, and synchronous: each user
//! action performs one blocking load / mutate / save cycle, and exactly one
//! process is assumed to own the artifacts (no file locking).
//!
//! ## Known quirk
//!
//! Website keys are normalized by uppercasing the first character only.
//! `"myBank"` and `"mybank"` stay distinct keys. This matches the original
//! manager's observable behavior and is preserved deliberately — see
//! [`store::canonical_website_key`].
//!
//! ## Public API
//!
//! The public surface of this crate is intentionally narrow. Only the types
//! and functions listed here are intended for use by callers; the crypto
//! internals are `pub(crate)`.

// Module declarations.
pub(crate) mod crypto;
pub mod error;
mod generate;
mod key;
pub mod lookup;
pub mod store;

pub use generate::generate_password;
pub use key::{AuthorizationKey, Gatekeeper};
pub use store::{Credential, CredentialSet, CredentialStore};

/// Conventional file name for the stored key hash artifact.
pub const DEFAULT_KEY_HASH_FILE: &str = "hashed_key.txt";

/// Conventional file name for the credential blob artifact.
pub const DEFAULT_BLOB_FILE: &str = "data.txt";
