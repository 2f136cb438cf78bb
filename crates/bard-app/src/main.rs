mod cli;
mod commands;
mod error;

use std::path::Path;
use std::process::ExitCode;

use bard_config::LogLevel;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::error::AppError;

const DEFAULT_LOG_DIRECTIVE: &str = "bard=info";

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the process environment win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim(), value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Expand a bare level into a directive for this workspace's crates.
///
/// Anything else is taken as a full `EnvFilter` directive.
fn log_directive(level: &str) -> String {
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            format!("bard={}", level.to_ascii_lowercase())
        }
        _ => level.to_string(),
    }
}

/// `--log-level` wins, then `RUST_LOG`, then the config file's level.
fn init_logging(cli_level: Option<&str>, configured: LogLevel) {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(log_directive(level)),
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(log_directive(configured.as_str()))),
    }
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<(), AppError> {
    let config_path = args.config.as_deref().map(Path::new);

    if args.command == Command::InitConfig {
        init_logging(args.log_level.as_deref(), LogLevel::default());
        commands::run_init_config(config_path)?;
        return Ok(());
    }

    let settings = bard_config::load_config(config_path)?;
    init_logging(args.log_level.as_deref(), settings.logging.level);
    tracing::info!("bard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?settings, "config loaded");

    match args.command {
        Command::Ask { prompt, json } => commands::run_ask(&settings, &prompt, json).await,
        Command::Chat => commands::run_chat(&settings).await,
        Command::InitConfig => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
