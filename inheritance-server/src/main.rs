use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use inheritance_core::TaxSchedule;
use inheritance_data::ScheduleLoader;
use inheritance_server::{AppConfig, AppState, app, logging};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

/// Inheritance tax calculation server.
#[derive(Parser, Debug)]
#[command(name = "inheritance-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides [server] bind)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Store backend (overrides [store] backend)
    #[arg(long)]
    backend: Option<String>,

    /// Log filter directive (overrides [logging] level)
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(backend) = &cli.backend {
        config.store.backend = backend.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    Ok(config)
}

fn load_schedule(config: &AppConfig) -> Result<TaxSchedule> {
    match &config.tax.schedule_file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
            ScheduleLoader::load(file)
                .with_context(|| format!("Failed to load schedule: {}", path.display()))
        }
        None => Ok(TaxSchedule::korea_2025().clone()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    logging::init_logging(&config.logging)?;

    let schedule = load_schedule(&config)?;
    info!(brackets = schedule.brackets().len(), "rate schedule ready");

    let repository = config
        .store
        .open()
        .with_context(|| format!("Failed to open '{}' store", config.store.backend))?;
    info!(backend = %config.store.backend, "declaration store ready");

    let state = AppState::new(repository, schedule);

    let listener = TcpListener::bind(config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!(address = %config.server.bind, "listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(async {
            if let Err(error) = shutdown_signal().await {
                tracing::error!(?error, "shutdown signal handler failed");
            }
        })
        .await
        .context("Server error")?;

    info!("server stopped");
    Ok(())
}

/// Waits for Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    info!("Shutdown signal received, starting graceful shutdown...");
    Ok(())
}
