// src/cli/handlers.rs
use std::io::Write;
use serde::Serialize;

use crate::cli::GenerationArgs;
use crate::core::config::Config;
use crate::generators::{self, GeneratorError};
use crate::models::{GenerationConfig, StrengthRating};
use crate::utils::{copy_password, format_strength, ClipboardSink};

pub const SHORT_LENGTH_WARNING: &str = "For better security, use at least 8 characters";

#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub config: GenerationConfig,
    pub passwords: Vec<String>,
    pub strength: StrengthRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StrengthReport {
    pub config: GenerationConfig,
    pub strength: StrengthRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

// Merge command-line flags over the configured defaults and validate the length
pub fn resolve_config(args: &GenerationArgs, config: &Config) -> Result<GenerationConfig, GeneratorError> {
    let raw_length = args
        .length
        .unwrap_or(config.default_password_length as i64);

    let length = generators::validate_length(
        raw_length,
        config.min_password_length,
        config.max_password_length,
    )?;

    Ok(GenerationConfig::new(
        length,
        args.include_numbers().unwrap_or(config.default_include_numbers),
        args.include_symbols().unwrap_or(config.default_include_symbols),
    ))
}

fn warning_for(generation: &GenerationConfig) -> Option<String> {
    generation
        .is_below_recommended()
        .then(|| SHORT_LENGTH_WARNING.to_string())
}

pub fn build_generation_report(generation: GenerationConfig, count: usize) -> GenerationReport {
    let passwords = (0..count).map(|_| generators::generate(&generation)).collect();

    GenerationReport {
        config: generation,
        passwords,
        strength: generators::rate_strength(&generation),
        warning: warning_for(&generation),
    }
}

pub fn build_strength_report(generation: GenerationConfig) -> StrengthReport {
    StrengthReport {
        config: generation,
        strength: generators::rate_strength(&generation),
        warning: warning_for(&generation),
    }
}

pub fn handle_generate<W: Write, C: ClipboardSink>(
    out: &mut W,
    args: &GenerationArgs,
    count: usize,
    clipboard: Option<&mut C>,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let generation = resolve_config(args, config)?;
    log::info!("Generating {} password(s) with {:?}", count, generation);

    let report = build_generation_report(generation, count);

    let notice = match (clipboard, report.passwords.first()) {
        (Some(clipboard), Some(password)) => Some(copy_password(clipboard, password)),
        _ => None,
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        // Keep stdout parseable
        if let Some(notice) = notice {
            eprintln!("{}", notice);
        }
        return Ok(());
    }

    // One password per line so the output can be piped or copied directly
    for password in &report.passwords {
        writeln!(out, "{}", password)?;
    }
    writeln!(out, "{}", format_strength(&report.strength))?;
    if let Some(warning) = &report.warning {
        writeln!(out, "⚠️  {}", warning)?;
    }
    if let Some(notice) = notice {
        writeln!(out, "{}", notice)?;
    }

    Ok(())
}

pub fn handle_strength<W: Write>(
    out: &mut W,
    args: &GenerationArgs,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let generation = resolve_config(args, config)?;
    let report = build_strength_report(generation);

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", format_strength(&report.strength))?;
    if let Some(warning) = &report.warning {
        writeln!(out, "⚠️  {}", warning)?;
    }

    Ok(())
}
