//! Random credential synthesis.
//!
//! Produces one password per call: 8–10 letters drawn uniformly from the
//! 52-letter alphabet, 2–4 symbols from a fixed set, and 2–4 digits, then a
//! uniform shuffle of the whole thing. No state persists between calls.
//!
//! This randomness feeds a user-visible password, not key or nonce material,
//! so it uses the `rand` thread RNG rather than the crate's `ring` source.

use rand::seq::SliceRandom;
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SYMBOLS: &[u8] = b"!?@#:&*%$^";
const DIGITS: &[u8] = b"0123456789";

/// Generate a random password.
///
/// The result is 12 to 18 characters long and always contains at least
/// 8 letters, 2 symbols, and 2 digits. Copying the result to the clipboard
/// is the GUI collaborator's job, not the generator's.
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    let mut chars: Vec<u8> = Vec::with_capacity(18);

    for _ in 0..rng.gen_range(8..=10) {
        chars.push(LETTERS[rng.gen_range(0..LETTERS.len())]);
    }
    for _ in 0..rng.gen_range(2..=4) {
        chars.push(SYMBOLS[rng.gen_range(0..SYMBOLS.len())]);
    }
    for _ in 0..rng.gen_range(2..=4) {
        chars.push(DIGITS[rng.gen_range(0..DIGITS.len())]);
    }

    chars.shuffle(&mut rng);
    chars.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_character_classes() {
        for _ in 0..200 {
            let password = generate_password();
            let len = password.chars().count();
            assert!((12..=18).contains(&len), "length {} out of range", len);

            let letters = password.chars().filter(|c| c.is_ascii_alphabetic()).count();
            let digits = password.chars().filter(|c| c.is_ascii_digit()).count();
            let symbols = password
                .chars()
                .filter(|c| SYMBOLS.contains(&(*c as u8)))
                .count();

            assert!(letters >= 8, "too few letters in {:?}", password);
            assert!(symbols >= 2, "too few symbols in {:?}", password);
            assert!(digits >= 2, "too few digits in {:?}", password);
            assert_eq!(letters + symbols + digits, len, "stray character in {:?}", password);
        }
    }

    #[test]
    fn test_calls_are_not_deterministic() {
        // 20 draws from a space this large collide with negligible probability.
        let passwords: Vec<String> = (0..20).map(|_| generate_password()).collect();
        let first = &passwords[0];
        assert!(
            passwords.iter().any(|p| p != first),
            "20 consecutive generations were identical"
        );
    }
}
