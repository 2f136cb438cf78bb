use clap::{Parser, Subcommand};

/// Command-line client for the Bard web chat.
#[derive(Parser, Debug)]
#[command(name = "bard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error) or a full filter directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Send one prompt and print the answer.
    Ask {
        prompt: String,

        /// Print the whole answer, ids included, as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Interactive multi-turn conversation on stdin.
    Chat,
    /// Write the commented config template.
    InitConfig,
}

pub fn parse() -> Args {
    Args::parse()
}
