//! House price prediction service.
//!
//! One binary, two processes: `serve` runs the JSON prediction API and
//! `dashboard` runs the form-based web UI that calls it.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use house_price_api::{ApiConfig, ApiServer, AppState};
use house_price_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use house_price_dashboard::DashboardServer;
use house_price_inference::LinearPriceModel;

/// House price prediction CLI.
#[derive(Parser, Debug)]
#[command(name = "house-price")]
#[command(about = "House price prediction API and dashboard")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Run the prediction API (default)
    Serve {
        /// Listen host
        #[arg(long)]
        host: Option<String>,

        /// Listen port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run the dashboard
    Dashboard {
        /// Listen host
        #[arg(long)]
        host: Option<String>,

        /// Listen port
        #[arg(long)]
        port: Option<u16>,

        /// Base URL of the prediction API
        #[arg(long, env = "API_URL")]
        api_url: Option<String>,
    },
}

fn house_price_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".house-price"))
        .unwrap_or_else(|| PathBuf::from(".house-price"))
}

/// Initialize tracing with console and file output.
///
/// Log files go to `~/.house-price/logs/` unless the config names another
/// directory, rotated daily.
fn init_tracing(config: &LoggingConfig, prefix: &str) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_target(true).with_ansi(true);

    if config.console_only {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console)
            .init();
        return Ok(());
    }

    let log_dir = match &config.dir {
        Some(dir) => PathBuf::from(ConfigLoader::expand_path(dir)),
        None => house_price_dir().join("logs"),
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes on drop and must outlive every log call.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Fold CLI overrides into the loaded configuration.
fn apply_cli_overrides(config: &mut Config, command: &Commands) {
    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
        Commands::Dashboard {
            host,
            port,
            api_url,
        } => {
            if let Some(host) = host {
                config.dashboard.host = host.clone();
            }
            if let Some(port) = port {
                config.dashboard.port = *port;
            }
            if let Some(api_url) = api_url {
                config.dashboard.api_url = api_url.clone();
            }
        }
    }
}

/// Reject invalid configuration, log warnings.
fn check_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        warn!("Config warning at {}: {}", warning.path, warning.message);
    }
    if result.is_valid() {
        return Ok(());
    }

    let messages: Vec<String> = result
        .errors
        .iter()
        .map(|e| format!("{}: {}", e.path, e.message))
        .collect();
    Err(format!("Invalid configuration: {}", messages.join("; ")).into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    apply_cli_overrides(&mut config, &command);

    let prefix = match command {
        Commands::Serve { .. } => "api",
        Commands::Dashboard { .. } => "dashboard",
    };
    init_tracing(&config.logging, prefix)?;
    check_config(&config)?;

    match command {
        Commands::Serve { .. } => run_api(&config).await,
        Commands::Dashboard { .. } => run_dashboard(&config).await,
    }
}

async fn run_api(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting house price API v{}", env!("CARGO_PKG_VERSION"));

    let model = LinearPriceModel::new(config.model.clone());
    info!("Loaded model '{}'", config.model.id);

    let state = Arc::new(AppState::new(Arc::new(model)));
    let server = ApiServer::new(ApiConfig::from(&config.server), state);
    server.run().await
}

async fn run_dashboard(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting house price dashboard v{}", env!("CARGO_PKG_VERSION"));

    let server = DashboardServer::from_config(&config.dashboard)?;
    server.run().await
}
