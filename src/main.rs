//! clievent - VPN client event tool
//!
//! Lists the client event vocabulary, emits single events through the
//! configured sinks, replays recorded JSON event logs and writes a
//! default configuration file.

use clap::{Parser, Subcommand};
use clievent_core::config::toml_config::{load_config_or_default, TomlConfig};
use clievent_core::error::ClieventError;
use clievent_core::init_logging;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "clievent")]
#[command(about = "Inspect, emit and replay VPN client events")]
struct Cli {
    /// Configuration file (default: ~/.config/clievent/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every event type with its band
    Kinds,
    /// Emit a single event through the configured sinks
    Emit(cli::emit::EmitArgs),
    /// Replay a JSON lines event log through the configured sinks
    Replay {
        /// Event log to read
        file: PathBuf,
    },
    /// Write the default configuration file
    Init {
        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // init must work even when the file it replaces does not load
    let loaded = match cli.command {
        Commands::Init { .. } => Ok(TomlConfig::default()),
        _ => load_config_or_default(cli.config.as_deref()),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let level = match config.logging.level_filter() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = init_logging(level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let result = match cli.command {
        Commands::Kinds => cli::kinds::run_kinds(),
        Commands::Emit(args) => cli::emit::run_emit(&config, args),
        Commands::Replay { file } => cli::replay::run_replay(&config, &file),
        Commands::Init { force } => cli::init::run_init(cli.config.as_deref(), force),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration errors (exit code 2)
                ClieventError::Config(_) | ClieventError::Toml(_) | ClieventError::TomlSerialize(_) => 2,
                // Bad input or runtime failures (exit code 1)
                ClieventError::Event(_) | ClieventError::Json(_) | ClieventError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
