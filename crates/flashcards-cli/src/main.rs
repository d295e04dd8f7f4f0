// Rust guideline compliant 2026-10-19

//! Flashcards CLI Application
//!
//! Interactive flashcard quizzes with per-card error tracking.

use anyhow::Context;
use clap::Parser;
use flashcards_cli::logging::init_tracing;
use flashcards_cli::{should_use_color, ConsolePrompter, Session};
use flashcards_core::config::DEFAULT_CONFIG_FILE;
use flashcards_core::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "flashcards",
    version,
    about = "Flashcards: term/definition quizzes with error tracking",
    long_about = "Flashcards keeps a set of term/definition cards, quizzes you on them and remembers which ones you get wrong. Cards are saved as plain text lines of the form 'term, definition, errors'.",
    after_help = "Examples:\n  flashcards\n  flashcards --import_from capitals.txt --export_to capitals.txt\n  flashcards --log-level debug --log-file flashcards.log\n  flashcards --export_to deck.txt --save-config\n"
)]
struct Cli {
    /// Card file to import at startup
    #[arg(long = "import_from", visible_alias = "import-from")]
    import_from: Option<PathBuf>,

    /// Card file to export to on exit
    #[arg(long = "export_to", visible_alias = "export-to")]
    export_to: Option<PathBuf>,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Diagnostics level
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,

    /// Write diagnostics as JSON to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Save the effective configuration to the config file and exit
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Command-line flags win over file and environment
    if cli.import_from.is_some() {
        config.import_from = cli.import_from;
    }
    if cli.export_to.is_some() {
        config.export_to = cli.export_to;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file;
    }
    if cli.no_color {
        config.color = false;
    }
    config.validate()?;

    if cli.save_config {
        config
            .save(&config_path)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
        println!("Configuration saved to {}", config_path.display());
        return Ok(());
    }

    let _guard = init_tracing(&config)?;

    let mut prompter = ConsolePrompter::stdin(config.color && should_use_color());
    let mut session = Session::new(&config);
    session.run(&mut prompter)?;

    Ok(())
}
