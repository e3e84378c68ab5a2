// src/cli/commands.rs
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        #[command(flatten)]
        options: GenerationArgs,

        /// How many passwords to print
        #[arg(long, short, default_value_t = 1)]
        count: usize,

        /// Copy the (first) password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Rate a configuration without generating a password
    Strength {
        #[command(flatten)]
        options: GenerationArgs,
    },

    /// Open the interactive generator
    Interactive,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
    #[arg(long, short, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Include digits (defaults to DEFAULT_INCLUDE_NUMBERS)
    #[arg(long, short, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// Leave out digits
    #[arg(long, overrides_with = "numbers")]
    pub no_numbers: bool,

    /// Include special characters (defaults to DEFAULT_INCLUDE_SYMBOLS)
    #[arg(long, short, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out special characters
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,
}

impl GenerationArgs {
    // None when neither flag of the pair was given
    pub fn include_numbers(&self) -> Option<bool> {
        flag_pair(self.numbers, self.no_numbers)
    }

    pub fn include_symbols(&self) -> Option<bool> {
        flag_pair(self.symbols, self.no_symbols)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
