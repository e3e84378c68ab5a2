// src/generators/mod.rs
use thiserror::Error;

mod password;
mod strength;

pub use password::{
    character_pool, generate, generate_with_rng, PasswordGenerator, DIGITS, LETTERS, SYMBOLS,
};
pub use strength::{rate_strength, score};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length cannot be negative (got {0})")]
    NegativeLength(i64),

    #[error("Password length must be between {min} and {max} (got {length})")]
    LengthOutOfRange { length: i64, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Check a user-supplied length before it reaches the generator.
pub fn validate_length(raw: i64, min: usize, max: usize) -> Result<usize> {
    if raw < 0 {
        log::warn!("Rejected negative password length {}", raw);
        return Err(GeneratorError::NegativeLength(raw));
    }

    let out_of_range = || GeneratorError::LengthOutOfRange { length: raw, min, max };

    let length = usize::try_from(raw).map_err(|_| out_of_range())?;
    if length < min || length > max {
        log::warn!("Rejected password length {} outside {}..={}", raw, min, max);
        return Err(out_of_range());
    }

    Ok(length)
}
