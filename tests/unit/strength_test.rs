use rstest::rstest;
use rust_passgen::generators::rate_strength;
use rust_passgen::models::{GenerationConfig, StrengthColor, StrengthLevel};

// ---------------------------------------------------------------------------
// Score thresholds
// ---------------------------------------------------------------------------

#[rstest]
#[case(6,   false, false, StrengthLevel::VeryWeak)]
#[case(7,   true,  false, StrengthLevel::Weak)]
#[case(8,   false, false, StrengthLevel::Weak)]
#[case(10,  true,  false, StrengthLevel::Medium)]
#[case(11,  false, true,  StrengthLevel::Medium)]
#[case(12,  false, false, StrengthLevel::Medium)]
#[case(12,  true,  false, StrengthLevel::Strong)]
#[case(6,   true,  true,  StrengthLevel::Medium)]
#[case(14,  true,  true,  StrengthLevel::VeryStrong)]
#[case(100, false, false, StrengthLevel::Medium)]
fn rating_follows_thresholds(
    #[case] length: usize,
    #[case] digits: bool,
    #[case] symbols: bool,
    #[case] expected: StrengthLevel,
) {
    let rating = rate_strength(&GenerationConfig::new(length, digits, symbols));
    assert_eq!(rating.level, expected, "length={length} digits={digits} symbols={symbols}");
}

// ---------------------------------------------------------------------------
// Display attributes
// ---------------------------------------------------------------------------

#[rstest]
#[case(StrengthLevel::VeryWeak,   "Very Weak",   StrengthColor::Red,     10)]
#[case(StrengthLevel::Weak,       "Weak",        StrengthColor::Orange,  25)]
#[case(StrengthLevel::Medium,     "Medium",      StrengthColor::Yellow,  50)]
#[case(StrengthLevel::Strong,     "Strong",      StrengthColor::Green,   75)]
#[case(StrengthLevel::VeryStrong, "Very Strong", StrengthColor::Emerald, 100)]
fn levels_carry_label_color_and_weight(
    #[case] level: StrengthLevel,
    #[case] label: &str,
    #[case] color: StrengthColor,
    #[case] percent: u8,
) {
    assert_eq!(level.label(), label);
    assert_eq!(level.color(), color);
    assert_eq!(level.percent(), percent);
    assert_eq!(level.to_string(), label);
}

#[test]
fn rating_is_deterministic_for_a_config() {
    let config = GenerationConfig::new(9, true, false);
    assert_eq!(rate_strength(&config), rate_strength(&config));
}
