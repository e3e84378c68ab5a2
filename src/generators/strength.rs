// src/generators/strength.rs
use crate::models::{GenerationConfig, StrengthLevel, StrengthRating};

/// Rate a configuration on a five-level scale.
///
/// One point each for a length of at least 8, a length of at least 12,
/// digits and symbols. The generated characters themselves are not inspected.
pub fn rate_strength(config: &GenerationConfig) -> StrengthRating {
    StrengthRating::from(StrengthLevel::from_score(score(config)))
}

pub fn score(config: &GenerationConfig) -> u8 {
    let mut score = 0;

    if config.length >= 8 {
        score += 1;
    }
    if config.length >= 12 {
        score += 1;
    }
    if config.allow_digits {
        score += 1;
    }
    if config.allow_symbols {
        score += 1;
    }

    score
}
