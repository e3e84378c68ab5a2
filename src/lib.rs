// src/lib.rs
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::generators::{generate, rate_strength, PasswordGenerator};
pub use crate::models::{GenerationConfig, StrengthLevel, StrengthRating};
