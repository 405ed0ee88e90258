use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollmark_core::AppConfig;

mod run;

#[derive(Parser)]
#[command(name = "scrollmark")]
#[command(author, version, about = "A terminal pager with a reading-progress bar")]
struct Cli {
    /// Text file to read
    file: PathBuf,

    /// Disable animated scrolling for this session
    #[arg(long)]
    no_smooth: bool,

    /// Scroll animation duration in milliseconds
    #[arg(long, value_name = "MS")]
    duration_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration, then apply session overrides
    let mut config = AppConfig::load()?;
    if cli.no_smooth {
        config.scroll.smooth_enabled = false;
    }
    if let Some(ms) = cli.duration_ms {
        config.scroll.animation_duration_ms = ms;
    }

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let title = cli
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("scrollmark")
        .to_string();

    run::run(Arc::new(config), &text, &title)
}
