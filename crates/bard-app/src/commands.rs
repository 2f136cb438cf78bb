//! Subcommand handlers.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use bard_client::{Answer, BardClient};
use bard_config::{toml_loader, BardSettings};
use tracing::{info, warn};

use crate::error::AppError;

/// One line of chat input, interpreted.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatCommand<'a> {
    Quit,
    Reset,
    Skip,
    Prompt(&'a str),
}

impl<'a> ChatCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            ChatCommand::Skip
        } else if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            ChatCommand::Quit
        } else if line == "/reset" {
            ChatCommand::Reset
        } else {
            ChatCommand::Prompt(line)
        }
    }
}

pub async fn run_ask(settings: &BardSettings, prompt: &str, json: bool) -> Result<(), AppError> {
    let mut client = BardClient::connect(&settings.client_config()).await?;
    let answer = client.ask(prompt).await?;
    println!("{}", render_answer(&answer, json)?);
    Ok(())
}

pub async fn run_chat(settings: &BardSettings) -> Result<(), AppError> {
    let mut client = BardClient::connect(&settings.client_config()).await?;

    println!("Type your message and press Enter. '/reset' starts over, 'quit' exits.\n");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("You: ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match ChatCommand::parse(&input) {
            ChatCommand::Skip => continue,
            ChatCommand::Quit => break,
            ChatCommand::Reset => {
                client.reset_conversation();
                println!("(new conversation)\n");
            }
            ChatCommand::Prompt(prompt) => match client.ask(prompt).await {
                Ok(answer) => println!("\nBard: {}\n", answer.content),
                Err(e) => {
                    warn!("ask failed: {e}");
                    eprintln!("\nError: {e}\n");
                }
            },
        }
    }

    info!("chat ended");
    Ok(())
}

/// Write the config template to `path`, or the default path when `None`.
pub fn run_init_config(path: Option<&Path>) -> Result<PathBuf, AppError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => toml_loader::default_config_path()?,
    };
    if path.exists() {
        return Err(AppError::ConfigExists(path));
    }
    toml_loader::create_default_config(&path)?;
    println!("Wrote {}", path.display());
    Ok(path)
}

fn render_answer(answer: &Answer, json: bool) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(answer)?)
    } else {
        Ok(answer.content.clone())
    }
}
