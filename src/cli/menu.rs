// src/cli/menu.rs
use inquire::{CustomType, InquireError, Select};
use std::error::Error;
use std::fmt;

use crate::cli::handlers::SHORT_LENGTH_WARNING;
use crate::core::config::Config;
use crate::generators::{self, PasswordGenerator};
use crate::models::GenerationConfig;
use crate::utils::{copy_password, format_strength, ClipboardSink, SystemClipboard};

// Entries offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Copy,
    Regenerate,
    SetLength,
    ToggleNumbers,
    ToggleSymbols,
    Exit,
}

impl MenuChoice {
    pub fn all() -> Vec<MenuChoice> {
        vec![
            MenuChoice::Copy,
            MenuChoice::Regenerate,
            MenuChoice::SetLength,
            MenuChoice::ToggleNumbers,
            MenuChoice::ToggleSymbols,
            MenuChoice::Exit,
        ]
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MenuChoice::Copy => "📋  Copy password",
            MenuChoice::Regenerate => "🔄  Regenerate password",
            MenuChoice::SetLength => "📏  Change length",
            MenuChoice::ToggleNumbers => "🔢  Toggle numbers",
            MenuChoice::ToggleSymbols => "✳️  Toggle special characters",
            MenuChoice::Exit => "🚪  Exit",
        };
        write!(f, "{}", text)
    }
}

// A resolved choice, with any prompted input attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Copy,
    Regenerate,
    SetLength(usize),
    ToggleNumbers,
    ToggleSymbols,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    Notice(String),
    Exit,
}

// Session state owned by the menu loop
#[derive(Debug, Clone)]
pub struct MenuState {
    pub generation: GenerationConfig,
    pub password: String,
}

impl MenuState {
    pub fn new(generation: GenerationConfig, generator: &PasswordGenerator) -> Self {
        Self {
            password: generator.generate_password(&generation),
            generation,
        }
    }

    // Replace the configuration; a new password is generated on every change
    pub fn update(&mut self, generation: GenerationConfig, generator: &PasswordGenerator) {
        self.generation = generation;
        self.password = generator.generate_password(&self.generation);
    }
}

pub fn apply_action<C: ClipboardSink + ?Sized>(
    state: &mut MenuState,
    action: MenuAction,
    generator: &PasswordGenerator,
    clipboard: &mut C,
) -> MenuOutcome {
    match action {
        MenuAction::Copy => return MenuOutcome::Notice(copy_password(clipboard, &state.password)),
        MenuAction::Regenerate => {
            let generation = state.generation;
            state.update(generation, generator);
        }
        MenuAction::SetLength(length) => state.update(state.generation.with_length(length), generator),
        MenuAction::ToggleNumbers => state.update(state.generation.toggle_digits(), generator),
        MenuAction::ToggleSymbols => state.update(state.generation.toggle_symbols(), generator),
        MenuAction::Exit => return MenuOutcome::Exit,
    }
    MenuOutcome::Continue
}

fn render(state: &MenuState) {
    let rating = generators::rate_strength(&state.generation);
    let on_off = |flag: bool| if flag { "on" } else { "off" };

    println!();
    println!("🔐 {}", console::style(&state.password).bold());
    println!("{}", format_strength(&rating));
    println!(
        "Length: {} · Numbers: {} · Special characters: {}",
        state.generation.length,
        on_off(state.generation.allow_digits),
        on_off(state.generation.allow_symbols)
    );
    if state.generation.is_below_recommended() {
        println!("{}", console::style(format!("⚠️  {}", SHORT_LENGTH_WARNING)).red());
    }
}

fn prompt_length(current: usize, config: &Config) -> Result<usize, InquireError> {
    let (min, max) = (config.min_password_length, config.max_password_length);

    loop {
        let raw = CustomType::<i64>::new("Password length:")
            .with_default(current as i64)
            .with_help_message(&format!("Between {} and {}", min, max))
            .with_error_message("Please type a whole number")
            .prompt()?;

        match generators::validate_length(raw, min, max) {
            Ok(length) => return Ok(length),
            Err(e) => println!("❌ {}", e),
        }
    }
}

fn is_exit(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

// Turn a menu choice into an action, prompting for input where needed.
// Ok(None) means the prompt was cancelled and the menu should be shown again.
fn resolve_choice(choice: MenuChoice, state: &MenuState, config: &Config) -> Result<Option<MenuAction>, InquireError> {
    let action = match choice {
        MenuChoice::Copy => MenuAction::Copy,
        MenuChoice::Regenerate => MenuAction::Regenerate,
        MenuChoice::SetLength => match prompt_length(state.generation.length, config) {
            Ok(length) => MenuAction::SetLength(length),
            Err(e) if is_exit(&e) => return Ok(None),
            Err(e) => return Err(e),
        },
        MenuChoice::ToggleNumbers => MenuAction::ToggleNumbers,
        MenuChoice::ToggleSymbols => MenuAction::ToggleSymbols,
        MenuChoice::Exit => MenuAction::Exit,
    };
    Ok(Some(action))
}

pub fn run_cli_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🦀 RUST PASSWORD GENERATOR      ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();
    // Kept for the whole session so copied text stays available
    let mut clipboard = SystemClipboard::default();
    let mut state = MenuState::new(config.default_generation(), &generator);

    loop {
        render(&state);

        let choice = match Select::new("What next?", MenuChoice::all()).prompt() {
            Ok(choice) => choice,
            Err(e) if is_exit(&e) => break,
            Err(e) => return Err(Box::new(e)),
        };

        let action = match resolve_choice(choice, &state, config)? {
            Some(action) => action,
            None => continue,
        };

        match apply_action(&mut state, action, &generator, &mut clipboard) {
            MenuOutcome::Continue => {}
            MenuOutcome::Notice(notice) => println!("{}", notice),
            MenuOutcome::Exit => break,
        }
    }

    log::info!("Interactive session closed");
    println!("👋 Goodbye!");
    Ok(())
}
