//! ada CLI: terminal client for the Ada course assistant

mod logging;

use ada_engine::{ask_once, Config, HttpAskService};
use clap::{Parser, Subcommand};
use logging::{default_log_path, init_logging, LogTarget};
use std::path::PathBuf;
use tracing::info;

/// Chat with Ada, the virtual assistant of the Sistemas para Internet course
#[derive(Debug, Parser)]
#[command(name = "ada")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Answering endpoint (overrides the configuration file)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Log file (default for the TUI: <tmp>/ada-chat.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Open the chat TUI (default when no command specified)
    Tui,

    /// Ask one question and print the answer
    Ask {
        /// The question to send
        #[arg(value_parser = non_blank)]
        question: String,
    },
}

fn non_blank(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("the question is blank".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    let command = cli.command.unwrap_or(Commands::Tui);
    init_logging(&log_target(&command, cli.log_file))?;

    let rt = tokio::runtime::Runtime::new()?;
    match command {
        Commands::Tui => rt.block_on(ada_tui::run_tui(&config))?,
        Commands::Ask { question } => {
            let service = HttpAskService::new(config.endpoint.clone());
            info!(endpoint = %service.endpoint(), "Asking one question");
            let answer = rt.block_on(ask_once(&config, &service, &question));
            println!("{answer}");
        }
    }
    Ok(())
}

/// Config file (or defaults) with the command-line endpoint applied.
fn load_config(cli: &Cli) -> Result<Config, ada_engine::ConfigError> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(endpoint) = &cli.endpoint {
        config.set_endpoint(endpoint.as_str())?;
    }
    Ok(config)
}

fn log_target(command: &Commands, log_file: Option<PathBuf>) -> LogTarget {
    match (command, log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Tui, None) => LogTarget::File(default_log_path()),
        (Commands::Ask { .. }, None) => LogTarget::Stderr,
    }
}
