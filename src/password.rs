//! Pattern 1: Custom Iterators
//!
//! A password generator as a bounded lazy sequence: each element is one
//! character drawn independently and uniformly from a fixed alphabet. The
//! sequence carries no uniqueness or entropy guarantee beyond per-character
//! independence.

use rand::rngs::ThreadRng;
use rand::Rng;

/// ASCII letters, digits, and punctuation — 94 characters.
const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Yields `length` random characters, one per call, then exhausts.
///
/// Like the other sequences in this crate it is consumed by iteration:
/// a fresh generator produces a fresh password.
pub struct PasswordGenerator {
    length: usize,
    generated: usize,
    rng: ThreadRng,
}

impl PasswordGenerator {
    pub fn new(length: usize) -> Self {
        PasswordGenerator {
            length,
            generated: 0,
            rng: rand::thread_rng(),
        }
    }
}

impl Iterator for PasswordGenerator {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.generated >= self.length {
            return None;
        }
        self.generated += 1;
        let index = self.rng.gen_range(0..ALPHABET.len());
        Some(ALPHABET[index] as char)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.length - self.generated;
        (remaining, Some(remaining))
    }
}

/// Collect a whole password in one call.
pub fn generate_password(length: usize) -> String {
    PasswordGenerator::new(length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_94_characters() {
        // 52 letters + 10 digits + 32 punctuation marks
        assert_eq!(ALPHABET.len(), 94);
    }

    #[test]
    fn yields_exactly_the_requested_length() {
        let password: Vec<char> = PasswordGenerator::new(12).collect();
        assert_eq!(password.len(), 12);
    }

    #[test]
    fn every_character_comes_from_the_alphabet() {
        for c in PasswordGenerator::new(200) {
            assert!(c.is_ascii(), "non-ascii character: {:?}", c);
            assert!(
                ALPHABET.contains(&(c as u8)),
                "character {:?} not in alphabet",
                c
            );
        }
    }

    #[test]
    fn zero_length_yields_nothing() {
        assert_eq!(PasswordGenerator::new(0).next(), None);
    }

    #[test]
    fn exhaustion_is_permanent() {
        let mut gen = PasswordGenerator::new(1);
        assert!(gen.next().is_some());
        assert_eq!(gen.next(), None);
        assert_eq!(gen.next(), None);
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let mut gen = PasswordGenerator::new(3);
        assert_eq!(gen.size_hint(), (3, Some(3)));
        gen.next();
        assert_eq!(gen.size_hint(), (2, Some(2)));
    }

    #[test]
    fn generate_password_collects_to_string() {
        let password = generate_password(12);
        assert_eq!(password.chars().count(), 12);
    }
}
