use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hackerstories::api::AlgoliaClient;
use hackerstories::config::Config;
use hackerstories::prefs::{FilePrefs, SessionPreference};
use hackerstories::ui;

#[derive(Debug, Parser)]
#[command(name = "hackerstories", about = "Search Hacker News stories from the terminal")]
struct Cli {
    /// Path to the config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the search endpoint from the config.
    #[arg(long)]
    endpoint: Option<String>,

    /// Start with this query instead of the persisted one.
    #[arg(long)]
    query: Option<String>,
}

/// Logs go to a file; stderr would fight the alternate screen.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hackerstories");
    fs::create_dir_all(&log_dir).context("failed to create log directory")?;
    let log_file =
        fs::File::create(log_dir.join("hackerstories.log")).context("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(log_file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.search.endpoint = endpoint;
    }

    let prefs_path =
        FilePrefs::default_path().unwrap_or_else(|| PathBuf::from("hackerstories-prefs.json"));
    let mut query =
        SessionPreference::initialize(FilePrefs::new(prefs_path), "search", &config.search.default_query);
    if let Some(initial) = cli.query {
        query.set(initial);
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let client = AlgoliaClient::new().context("failed to build HTTP client")?;

    tracing::info!(endpoint = %config.search.endpoint, query = %query.value(), "starting session");
    ui::runtime::run(client, &config, query, runtime.handle().clone())?;
    Ok(())
}
