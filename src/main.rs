//! Trendboard CLI
//!
//! Serve the trend dashboard or render it once to a static HTML file.
//!
//! # Configuration
//!
//! Settings come from the first config file found (see `Config::load_default`)
//! or `--config`, then these environment variables:
//! - `TRENDBOARD_DB_PATH`: Trend database (default: youtube.db)
//! - `TRENDBOARD_HOST` / `TRENDBOARD_PORT`: Bind address (default: 0.0.0.0:8501)
//! - `TRENDBOARD_LOG_LEVEL` / `TRENDBOARD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trendboard::api::{serve, AppState};
use trendboard::config::{generate_default_config, Config, LoggingConfig};
use trendboard::dashboard::{render_dashboard, View};
use trendboard::store::SnapshotLoader;
use trendboard::trends;

#[derive(Parser)]
#[command(name = "trendboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "YouTube trend intelligence dashboard")]
#[command(long_about = "Trendboard ranks videos by view velocity, flags the viral top decile\nand serves the result as a single-page dashboard.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Trend database path
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Render the dashboard once as HTML
    Render {
        /// Trend database path
        #[arg(long)]
        db: Option<PathBuf>,
        /// View to render (default, viral, early, detailed)
        #[arg(short, long, default_value = "default")]
        view: View,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, db } => {
            let mut config = load_config(cli.config.as_ref())?;
            init_tracing(&config.logging);

            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }
            if let Some(db) = db {
                config.storage.db_path = db.to_string_lossy().to_string();
            }

            tracing::info!("Starting Trendboard v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Trend database: {}", config.storage.db_path);
            tracing::info!("Candidate sources: {:?}", config.storage.sources);

            serve(AppState::new(config)).await?;
        }
        Commands::Render { db, view, output } => {
            let mut config = load_config(cli.config.as_ref())?;
            init_tracing(&config.logging);

            if let Some(db) = db {
                config.storage.db_path = db.to_string_lossy().to_string();
            }

            let loader = SnapshotLoader::from_config(&config.storage);
            let snapshot = trends::load_ranked(&loader)?;
            if snapshot.is_none() {
                tracing::warn!("No data available yet; rendering empty dashboard");
            }

            let html = render_dashboard(snapshot.as_ref(), view, &config.dashboard);
            write_output(output.as_ref(), &html)?;
        }
        Commands::Config { output } => {
            write_output(output.as_ref(), &generate_default_config())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => Ok(Config::load_default()),
    }
}

/// Initialize tracing from the logging config; `RUST_LOG` wins when set
///
/// Logs go to stderr so `render` can write HTML to stdout.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("trendboard={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_output(output: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("Wrote {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
