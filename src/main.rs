use clap::Parser;
use std::io;
use std::path::Path;

use rust_passgen::cli::{self, Args, CliCommand};
use rust_passgen::core::config::Config;
use rust_passgen::logging;
use rust_passgen::utils::SystemClipboard;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    config.log_rejected();
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    config.validate()?;

    let mut stdout = io::stdout().lock();

    match args.command {
        Some(CliCommand::Generate { options, count, copy }) => {
            let mut clipboard = SystemClipboard::default();
            let clipboard = copy.then_some(&mut clipboard);
            cli::handlers::handle_generate(&mut stdout, &options, count, clipboard, &config, args.json)
        }
        Some(CliCommand::Strength { options }) => {
            cli::handlers::handle_strength(&mut stdout, &options, &config, args.json)
        }
        Some(CliCommand::Interactive) | None => {
            if args.json {
                log::warn!("--json has no effect in interactive mode");
            }
            drop(stdout);
            log::info!("Launching interactive generator");
            cli::menu::run_cli_menu(&config).map_err(|e| anyhow::anyhow!("{}", e))
        }
    }
}
