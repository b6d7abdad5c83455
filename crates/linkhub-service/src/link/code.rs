//! Short code generation.

use rand::Rng;

/// Characters a short code is drawn from: `[A-Za-z0-9]`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of candidate short codes.
///
/// Candidates need not be unique; the link service retries on collision.
pub trait ShortCodeGenerator: Send + Sync + std::fmt::Debug {
    /// Produce one candidate code.
    fn generate(&self) -> String;
}

/// Uniform random fixed-length alphanumeric codes.
#[derive(Debug, Clone)]
pub struct AlphanumericGenerator {
    length: usize,
}

impl AlphanumericGenerator {
    /// Creates a generator producing codes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Length of every generated code.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl ShortCodeGenerator for AlphanumericGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }
}
