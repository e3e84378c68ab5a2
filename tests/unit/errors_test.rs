use rust_passgen::core::config::ConfigError;
use rust_passgen::generators::{validate_length, GeneratorError};

// === GeneratorError Tests ===

#[test]
fn negative_length_display() {
    let err = GeneratorError::NegativeLength(-5);
    assert_eq!(err.to_string(), "Password length cannot be negative (got -5)");
}

#[test]
fn out_of_range_display() {
    let err = GeneratorError::LengthOutOfRange { length: 120, min: 6, max: 100 };
    assert_eq!(err.to_string(), "Password length must be between 6 and 100 (got 120)");
}

#[test]
fn validate_length_reports_the_bad_value() {
    assert_eq!(validate_length(-1, 6, 100), Err(GeneratorError::NegativeLength(-1)));
    assert_eq!(
        validate_length(3, 6, 100),
        Err(GeneratorError::LengthOutOfRange { length: 3, min: 6, max: 100 })
    );
    assert_eq!(validate_length(42, 6, 100), Ok(42));
}

#[test]
fn generator_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(GeneratorError::NegativeLength(-1));
    assert!(err.source().is_none());
}

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    assert_eq!(
        ConfigError::InvalidBounds { min: 50, max: 10 }.to_string(),
        "Minimum password length 50 is greater than maximum 10"
    );
    assert_eq!(
        ConfigError::DefaultOutOfRange { length: 4, min: 6, max: 100 }.to_string(),
        "Default password length 4 is outside 6..=100"
    );
}
