//! Command-line surface.
//!
//! One subcommand per interaction of the original chat front-ends, plus
//! `history` and `classify` for inspecting the local state offline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sector-chat",
    version,
    about = "Multi-domain chat bot: sector-aware answers, question history, image descriptions"
)]
pub struct Cli {
    /// History log path (overrides SECTOR_CHAT_HISTORY)
    #[arg(long, global = true, value_name = "PATH")]
    pub history: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Ask one question and show the answer, its sector, and recent history
    Ask {
        /// Question or topic (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Read questions from stdin, one per line, until EOF
    Chat,

    /// Describe an uploaded image (jpg, jpeg or png)
    Image {
        /// Image file
        path: PathBuf,

        /// What you want to know about the image (optional)
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Show the most recent questions, newest first
    History {
        /// Number of rows (defaults to SECTOR_CHAT_HISTORY_LIMIT or 5)
        #[arg(short, long, value_parser = parse_limit_arg)]
        limit: Option<usize>,

        /// Hide rows whose expiry time has passed
        #[arg(long)]
        active_only: bool,
    },

    /// Show which sector a question maps to, without calling the model
    Classify {
        /// Question or topic (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Whether the command talks to the hosted model.
    pub fn needs_api(&self) -> bool {
        matches!(self, Command::Ask { .. } | Command::Chat | Command::Image { .. })
    }
}

fn parse_limit_arg(raw: &str) -> Result<usize, String> {
    crate::config::parse_limit("--limit", raw).map_err(|e| e.to_string())
}
