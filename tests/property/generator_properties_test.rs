//! Property-based tests for password generation and strength rating.
//!
//! These tests check the generator's output shape and pool membership for
//! arbitrary configurations, and the monotonicity of the strength heuristic.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rust_passgen::generators::{character_pool, generate, generate_with_rng, rate_strength};
use rust_passgen::models::GenerationConfig;

fn arb_config() -> impl Strategy<Value = GenerationConfig> {
    (0usize..=200, any::<bool>(), any::<bool>())
        .prop_map(|(length, digits, symbols)| GenerationConfig::new(length, digits, symbols))
}

// **Property 1: Output length**
//
// *For any* configuration, the generated password has exactly `length` characters.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn generated_length_matches_config(config in arb_config()) {
        let password = generate(&config);
        prop_assert_eq!(password.chars().count(), config.length);
    }
}

// **Property 2: Pool membership**
//
// *For any* configuration and seed, every character belongs to the pool
// implied by the digit and symbol flags.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn generated_chars_belong_to_pool(config in arb_config(), seed in any::<u64>()) {
        let pool = character_pool(&config);
        let password = generate_with_rng(&config, &mut StdRng::seed_from_u64(seed));

        for c in password.chars() {
            prop_assert!(pool.contains(&c), "{:?} not in pool for {:?}", c, config);
        }
        if !config.allow_digits {
            prop_assert!(!password.chars().any(|c| c.is_ascii_digit()));
        }
        if !config.allow_symbols {
            prop_assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}

// **Property 3: Monotonic rating**
//
// Growing the length or enabling a flag never lowers the rating.
proptest! {
    #[test]
    fn rating_is_monotonic(config in arb_config(), extra in 0usize..50) {
        let base = rate_strength(&config).level;

        prop_assert!(rate_strength(&config.with_length(config.length + extra)).level >= base);
        if !config.allow_digits {
            prop_assert!(rate_strength(&config.toggle_digits()).level >= base);
        }
        if !config.allow_symbols {
            prop_assert!(rate_strength(&config.toggle_symbols()).level >= base);
        }
    }
}

#[test]
fn zero_length_is_empty_for_every_flag_combination() {
    for digits in [false, true] {
        for symbols in [false, true] {
            assert_eq!(generate(&GenerationConfig::new(0, digits, symbols)), "");
        }
    }
}

#[test]
fn repeated_calls_resample() {
    let config = GenerationConfig::new(24, true, true);
    let first = generate(&config);
    let second = generate(&config);
    assert_ne!(first, second, "two 24-character draws from 80 symbols should differ");
}

#[test]
fn every_pool_character_eventually_appears() {
    let config = GenerationConfig::new(20_000, true, true);
    let password = generate_with_rng(&config, &mut StdRng::seed_from_u64(42));

    for c in character_pool(&config) {
        assert!(password.contains(c), "{c:?} never sampled");
    }
}
