//! Short code generation.
//!
//! Codes are random and unchecked: two calls may return the same code, and
//! the later write silently replaces the earlier entry. Substitute another
//! [`CodeGenerator`] to change that policy.

use crate::domain::entities::ShortCode;
use rand::Rng;

/// Alphabet for generated codes.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated codes.
pub const CODE_LENGTH: usize = 6;

/// Source of new short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a code. Must not fail.
    fn generate(&self) -> ShortCode;
}

/// Uniform random codes over [`CODE_ALPHABET`].
///
/// # Format
///
/// - Length: [`CODE_LENGTH`] characters (6 by default)
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~35.7 bits at the default length
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self {
            length: CODE_LENGTH,
        }
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();

        let code: String = (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[idx] as char
            })
            .collect();

        ShortCode::from(code)
    }
}
