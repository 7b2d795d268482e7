//! Low-level cryptographic operations.
//!
//! This module is the only place in the crate that imports `ring`. All other
//! modules encrypt, decrypt, hash, and draw randomness exclusively through the
//! functions exposed here.
//!
//! Primitive choices:
//! - **Cipher**: AES-256-GCM (authenticated encryption)
//! - **Nonce**: 96-bit (12 bytes), generated fresh per operation via `SystemRandom`
//! - **Key size**: 256 bits (32 bytes) — the passphrase bytes are used directly
//! - **Passphrase hash**: PBKDF2-HMAC-SHA256 with a random 16-byte salt

use std::num::NonZeroU32;

use ring::aead::{self, Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM};
use ring::error::Unspecified;
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};

/// The AEAD algorithm used for the credential blob.
const ALGORITHM: &aead::Algorithm = &AES_256_GCM;

/// Size of the nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Size of the authorization key in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Size of the salt stored alongside the passphrase hash.
pub const SALT_LEN: usize = 16;

/// Size of the derived passphrase hash (SHA-256 output length).
pub const HASH_LEN: usize = 32;

/// PBKDF2 iteration count for the stored passphrase hash.
pub const PBKDF2_ITERATIONS: NonZeroU32 = match NonZeroU32::new(100_000) {
    Some(n) => n,
    None => panic!("iteration count must be non-zero"),
};

static PBKDF2_ALG: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;

/// Generate a fresh random nonce.
///
/// Uses `ring::rand::SystemRandom` — the only source of randomness for key,
/// nonce, and salt material in the crate. A fresh nonce is generated for every
/// encryption call; there is no counter-based generation.
fn generate_nonce_bytes() -> Result<[u8; NONCE_LEN], Unspecified> {
    let rng = SystemRandom::new();
    let mut buf = [0u8; NONCE_LEN];
    rng.fill(&mut buf)?;
    Ok(buf)
}

/// Encrypt a plaintext payload using AES-256-GCM.
///
/// Returns the nonce prepended to the ciphertext. The caller does not need to
/// manage the nonce separately — it is bundled with the output and extracted
/// automatically during decryption.
///
/// # Layout of returned bytes
/// ```text
/// [ nonce (12 bytes) ][ ciphertext + GCM tag ]
/// ```
pub fn encrypt(key_bytes: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>, Unspecified> {
    let unbound = UnboundKey::new(ALGORITHM, key_bytes)?;
    let key = LessSafeKey::new(unbound);

    let nonce_bytes = generate_nonce_bytes()?;
    let nonce = Nonce::assume_unique_for_key(nonce_bytes);

    let mut in_out = plaintext.to_vec();
    key.seal_in_place_append_tag(nonce, Aad::empty(), &mut in_out)?;

    let mut output = Vec::with_capacity(NONCE_LEN + in_out.len());
    output.extend_from_slice(&nonce_bytes);
    output.append(&mut in_out);
    Ok(output)
}

/// Decrypt a ciphertext payload using AES-256-GCM.
///
/// Expects the input to be in the layout produced by `encrypt`: nonce
/// (12 bytes) followed by ciphertext and GCM tag.
///
/// If the key is wrong or the ciphertext has been tampered with, the GCM
/// authentication check fails and this function returns an error. The caller
/// receives no partial plaintext.
pub fn decrypt(key_bytes: &[u8; KEY_LEN], ciphertext: &[u8]) -> Result<Vec<u8>, Unspecified> {
    if ciphertext.len() < NONCE_LEN {
        return Err(Unspecified);
    }

    let nonce_bytes: [u8; NONCE_LEN] = ciphertext[..NONCE_LEN]
        .try_into()
        .map_err(|_| Unspecified)?;
    let nonce = Nonce::assume_unique_for_key(nonce_bytes);

    let unbound = UnboundKey::new(ALGORITHM, key_bytes)?;
    let key = LessSafeKey::new(unbound);

    let mut payload = ciphertext[NONCE_LEN..].to_vec();
    let plaintext = key.open_in_place(nonce, Aad::empty(), &mut payload)?;

    Ok(plaintext.to_vec())
}

/// Generate a random salt for the stored passphrase hash.
pub fn generate_salt() -> Result<[u8; SALT_LEN], Unspecified> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)?;
    Ok(salt)
}

/// Derive the salted passphrase hash that is persisted at setup time.
///
/// PBKDF2 is one-way: the stored hash reveals nothing about the passphrase,
/// and therefore nothing about the encryption key it doubles as.
pub fn hash_passphrase(passphrase: &[u8], salt: &[u8]) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    pbkdf2::derive(PBKDF2_ALG, PBKDF2_ITERATIONS, salt, passphrase, &mut out);
    out
}

/// Check a candidate passphrase against a previously derived hash.
///
/// The iteration count comes from the stored artifact so hashes written
/// under an older count keep verifying. `ring::pbkdf2::verify` performs the
/// comparison in constant time, so a wrong candidate cannot be distinguished
/// by timing how far the comparison progressed.
pub fn verify_passphrase(
    passphrase: &[u8],
    salt: &[u8],
    iterations: NonZeroU32,
    expected: &[u8],
) -> bool {
    pbkdf2::verify(PBKDF2_ALG, iterations, salt, passphrase, expected).is_ok()
}
