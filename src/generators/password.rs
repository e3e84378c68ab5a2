// src/generators/password.rs
use rand::{distributions::Uniform, Rng};
use rand::distributions::Distribution;
use crate::models::GenerationConfig;

pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*-_+=[]{}~`";

// Characters eligible for sampling, in fixed order: letters, digits, symbols
pub fn character_pool(config: &GenerationConfig) -> Vec<char> {
    let mut chars: Vec<u8> = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());

    chars.extend(LETTERS);
    if config.allow_digits {
        chars.extend(DIGITS);
    }
    if config.allow_symbols {
        chars.extend(SYMBOLS);
    }

    chars.into_iter().map(char::from).collect()
}

/// Generate a password using the thread-local RNG.
pub fn generate(config: &GenerationConfig) -> String {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generate a password drawing from the given RNG.
///
/// Each position is sampled independently and uniformly from the pool, with
/// replacement. A zero length yields an empty string.
pub fn generate_with_rng<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> String {
    let pool = character_pool(config);
    // The pool always holds the 52 letters, so the range is never empty
    let dist = Uniform::from(0..pool.len());

    let password: String = (0..config.length)
        .map(|_| pool[dist.sample(rng)])
        .collect();

    log::debug!(
        "Generated password of length {} from a pool of {} characters",
        password.len(),
        pool.len()
    );

    password
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, config: &GenerationConfig) -> String {
        generate(config)
    }

    pub fn rate_strength(&self, config: &GenerationConfig) -> crate::models::StrengthRating {
        super::strength::rate_strength(config)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
