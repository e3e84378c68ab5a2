// src/utils/format.rs
use console::{style, Color, StyledObject};

use crate::models::{StrengthColor, StrengthRating};

pub const BAR_WIDTH: usize = 20;

/// Number of filled cells for a bar of `width` cells at `percent`.
pub fn filled_cells(percent: u8, width: usize) -> usize {
    (percent.min(100) as usize * width + 50) / 100
}

// Plain bar, e.g. "[#####---------------]"
pub fn strength_bar(percent: u8, width: usize) -> String {
    let filled = filled_cells(percent, width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn terminal_color(color: StrengthColor) -> Color {
    match color {
        StrengthColor::Red => Color::Red,
        StrengthColor::Orange => Color::Color256(208),
        StrengthColor::Yellow => Color::Yellow,
        StrengthColor::Green => Color::Green,
        StrengthColor::Emerald => Color::Color256(36),
    }
}

pub fn styled_bar(rating: &StrengthRating) -> StyledObject<String> {
    style(strength_bar(rating.percent, BAR_WIDTH)).fg(terminal_color(rating.color))
}

// "Strength: Medium [##########----------] 50%"
pub fn format_strength(rating: &StrengthRating) -> String {
    format!(
        "Strength: {} {} {}%",
        style(&rating.label).fg(terminal_color(rating.color)).bold(),
        styled_bar(rating),
        rating.percent
    )
}
