// src/models.rs
use serde::{Serialize, Deserialize};

/// Length below which the front ends show a security advisory.
pub const RECOMMENDED_MIN_LENGTH: usize = 8;

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub allow_digits: bool,
    pub allow_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: RECOMMENDED_MIN_LENGTH,
            allow_digits: false,
            allow_symbols: false,
        }
    }
}

impl GenerationConfig {
    pub fn new(length: usize, allow_digits: bool, allow_symbols: bool) -> Self {
        Self { length, allow_digits, allow_symbols }
    }

    pub fn with_length(self, length: usize) -> Self {
        Self { length, ..self }
    }

    pub fn toggle_digits(self) -> Self {
        Self { allow_digits: !self.allow_digits, ..self }
    }

    pub fn toggle_symbols(self) -> Self {
        Self { allow_symbols: !self.allow_symbols, ..self }
    }

    pub fn is_below_recommended(&self) -> bool {
        self.length < RECOMMENDED_MIN_LENGTH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a heuristic score to a level. Scores above 4 saturate.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Medium,
            3 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    pub fn color(&self) -> StrengthColor {
        match self {
            StrengthLevel::VeryWeak => StrengthColor::Red,
            StrengthLevel::Weak => StrengthColor::Orange,
            StrengthLevel::Medium => StrengthColor::Yellow,
            StrengthLevel::Strong => StrengthColor::Green,
            StrengthLevel::VeryStrong => StrengthColor::Emerald,
        }
    }

    /// Width of the strength bar, in percent.
    pub fn percent(&self) -> u8 {
        match self {
            StrengthLevel::VeryWeak => 10,
            StrengthLevel::Weak => 25,
            StrengthLevel::Medium => 50,
            StrengthLevel::Strong => 75,
            StrengthLevel::VeryStrong => 100,
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthColor {
    Red,
    Orange,
    Yellow,
    Green,
    Emerald,
}

// Rating as rendered by the front ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthRating {
    pub level: StrengthLevel,
    pub score: u8,
    pub label: String,
    pub color: StrengthColor,
    pub percent: u8,
}

impl From<StrengthLevel> for StrengthRating {
    fn from(level: StrengthLevel) -> Self {
        Self {
            level,
            score: level as u8,
            label: level.label().to_string(),
            color: level.color(),
            percent: level.percent(),
        }
    }
}
