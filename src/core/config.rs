// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use thiserror::Error;

use crate::models::GenerationConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum password length {min} is greater than maximum {max}")]
    InvalidBounds { min: usize, max: usize },

    #[error("Default password length {length} is outside {min}..={max}")]
    DefaultOutOfRange { length: usize, min: usize, max: usize },
}

// Environment value that could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedVar {
    pub key: String,
    pub value: String,
}

// Configuration for the generator front ends
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Values ignored while loading; logged once the logger is up
    pub rejected: Vec<RejectedVar>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 8,
            default_include_numbers: false,
            default_include_symbols: false,
            min_password_length: 6,
            max_password_length: 100,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            rejected: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut rejected = Vec::new();

        // Password Generation
        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut rejected) {
            config.default_password_length = length;
        }

        if let Some(numbers) = parse_var(&lookup, "DEFAULT_INCLUDE_NUMBERS", &mut rejected) {
            config.default_include_numbers = numbers;
        }

        if let Some(symbols) = parse_var(&lookup, "DEFAULT_INCLUDE_SYMBOLS", &mut rejected) {
            config.default_include_symbols = symbols;
        }

        if let Some(min) = parse_var(&lookup, "MIN_PASSWORD_LENGTH", &mut rejected) {
            config.min_password_length = min;
        }

        if let Some(max) = parse_var(&lookup, "MAX_PASSWORD_LENGTH", &mut rejected) {
            config.max_password_length = max;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => rejected.push(RejectedVar { key: "LOG_LEVEL".to_string(), value: level }),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config.rejected = rejected;
        config
    }

    // Report ignored environment values. Call after logging::init.
    pub fn log_rejected(&self) {
        for var in &self.rejected {
            log::warn!("Ignoring invalid value '{}' for {}", var.value, var.key);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_password_length, self.max_password_length);

        if min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }

        if self.default_password_length < min || self.default_password_length > max {
            return Err(ConfigError::DefaultOutOfRange {
                length: self.default_password_length,
                min,
                max,
            });
        }

        Ok(())
    }

    // Starting configuration for a fresh generator session
    pub fn default_generation(&self) -> GenerationConfig {
        GenerationConfig::new(
            self.default_password_length,
            self.default_include_numbers,
            self.default_include_symbols,
        )
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, rejected: &mut Vec<RejectedVar>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            rejected.push(RejectedVar { key: key.to_string(), value: raw });
            None
        }
    }
}
