//! Sector Chat — application entry point.
//!
//! This is the shell that wires together all domains and commands.
//! No business logic lives here — only module declarations, startup
//! (env files, logging, config) and command dispatch.
//!
//! Domains:
//!   - sector/           — question → sector → instruction prompt
//!   - history/          — append-only question log
//!   - llm/              — Gemini text + vision completions
//!
//! Flows and surface:
//!   - pipeline_text.rs  — classify → record → complete
//!   - pipeline_image.rs — image + prompt → complete
//!   - cli.rs / commands.rs — clap surface and plain-text rendering

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod llm;
pub mod pipeline_image;
pub mod pipeline_text;
pub mod sector;

use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use std::process::ExitCode;

/// Entry point — called by the binary.
pub async fn run() -> ExitCode {
    // Load .env.local → .env from the working directory.
    'env_load: for env_file in [".env.local", ".env"] {
        let path = std::path::Path::new(env_file);
        if path.exists() {
            match dotenvy::from_path(path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let (mut config, warnings) = AppConfig::from_env();
    for e in &warnings {
        log::warn!("[STARTUP] Invalid configuration, using default: {}", e);
        eprintln!("Warning: {e}. Using the default.");
    }
    if let Some(path) = cli.history {
        config.history_path = path;
    }

    log::info!(
        "[STARTUP] history={} limit={} malformed_rows={}",
        config.history_path.display(),
        config.history_limit,
        config.malformed_rows
    );

    if cli.command.needs_api() && !config.has_api_key() {
        log::warn!("[STARTUP] No GOOGLE_API_KEY or GEMINI_API_KEY set");
        eprintln!("Warning: GOOGLE_API_KEY is not set. Answers will fail until it is configured.");
    }

    match cli.command {
        Command::Ask { text } => commands::ask(&config, &text.join(" ")).await,
        Command::Chat => commands::chat(&config).await,
        Command::Image { path, prompt } => {
            commands::image(&config, &path, prompt.as_deref()).await
        }
        Command::History { limit, active_only } => {
            commands::history(&config, limit.unwrap_or(config.history_limit), active_only)
        }
        Command::Classify { text, json } => commands::classify(&config, &text.join(" "), json),
    }
}
