//! GraceNav CLI — Command-line interface for the hover-intent menu engine.
//!
//! Usage:
//!   gracenav replay <PATH>     Replay a recorded session through the engine
//!   gracenav classify <PATH>   Classify pointer motion sample by sample
//!   gracenav drive <PATH>      Play a session through the live driver
//!   gracenav synth <PATH>      Write a synthetic session for experimentation

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gracenav_common::config::MenuOptions;

mod commands;

#[derive(Parser)]
#[command(
    name = "gracenav",
    about = "Hover-intent navigation menu engine",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Engine options shared by replay and classify. A config file provides
/// the baseline; individual flags override it.
#[derive(Args)]
struct EngineOptions {
    /// Path to a JSON options file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grace delay in milliseconds
    #[arg(long)]
    delay_ms: Option<f64>,

    /// Marker applied to the active item
    #[arg(long)]
    marker: Option<String>,

    /// Maximum retained motion samples
    #[arg(long)]
    history_limit: Option<usize>,

    /// Horizontal motion sensitivity
    #[arg(long)]
    x_sensitivity: Option<f64>,

    /// Vertical motion sensitivity
    #[arg(long)]
    y_sensitivity: Option<f64>,

    /// History decay interval in milliseconds
    #[arg(long)]
    decay_interval_ms: Option<f64>,
}

impl EngineOptions {
    fn resolve(&self) -> anyhow::Result<MenuOptions> {
        let mut options = match &self.config {
            Some(path) => MenuOptions::load(path)
                .map_err(|e| anyhow::anyhow!("Failed to load options: {e}"))?,
            None => MenuOptions::default(),
        };

        if let Some(delay_ms) = self.delay_ms {
            options.delay_ms = delay_ms;
        }
        if let Some(marker) = &self.marker {
            options.active_marker = marker.clone();
        }
        if let Some(history_limit) = self.history_limit {
            options.history_limit = history_limit;
        }
        if let Some(x) = self.x_sensitivity {
            options.horizontal_sensitivity = x;
        }
        if let Some(y) = self.y_sensitivity {
            options.vertical_sensitivity = y;
        }
        if let Some(decay_interval_ms) = self.decay_interval_ms {
            options.decay_interval_ms = decay_interval_ms;
        }

        Ok(options.normalized())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded event stream and print the marker transitions
    Replay {
        /// Path to the events JSONL file
        path: PathBuf,

        /// Print transitions as JSON lines instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        options: EngineOptions,
    },

    /// Classify pointer motion direction sample by sample
    Classify {
        /// Path to the events JSONL file
        path: PathBuf,

        #[command(flatten)]
        options: EngineOptions,
    },

    /// Play a recorded session through the live menu driver in real time
    Drive {
        /// Path to the events JSONL file
        path: PathBuf,

        #[command(flatten)]
        options: EngineOptions,
    },

    /// Write a synthetic rightward-crossing session
    Synth {
        /// Output JSONL path
        path: PathBuf,

        /// Number of trigger items crossed
        #[arg(long, default_value = "3")]
        items: u64,

        /// Milliseconds between consecutive enters
        #[arg(long, default_value = "80")]
        spacing_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    gracenav_common::logging::init_logging(&gracenav_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
    });

    match cli.command {
        Commands::Replay {
            path,
            json,
            options,
        } => commands::replay::run(path, json, options.resolve()?),
        Commands::Classify { path, options } => commands::classify::run(path, options.resolve()?),
        Commands::Drive { path, options } => commands::drive::run(path, options.resolve()?).await,
        Commands::Synth {
            path,
            items,
            spacing_ms,
        } => commands::synth::run(path, items, spacing_ms),
    }
}
