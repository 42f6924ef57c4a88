//! Marketplace binary — thin CLI shell over the [`marketplace_server`] library crate.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use marketplace_core::config::MarketplaceConfig;
use marketplace_http::{HttpCatalog, SharedCatalog, StaticCatalog};
use tracing::{error, info};

use marketplace_server::render::load_template;
use marketplace_server::{build_router, AppState};

// ---------------------------------------------------------------------------
// CLI definition (clap derive)
// ---------------------------------------------------------------------------

/// Sample marketplace server — pre-rendered catalog page and static front-end.
#[derive(Parser)]
#[command(name = "marketplace", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (default: ./marketplace.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog API root, e.g. https://host/api
    #[arg(long)]
    api_url: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Bind to 0.0.0.0 instead of 127.0.0.1 (localhost)
    #[arg(long)]
    bind_all: bool,

    /// Path to the front-end dist directory
    #[arg(long)]
    dist: Option<PathBuf>,

    /// Serve the catalog from a local JSON file instead of the API
    #[arg(long, value_name = "FILE")]
    fixture: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// File settings with command-line flags on top.
    fn settings(&self) -> Result<MarketplaceConfig, marketplace_core::config::ConfigError> {
        let mut config = MarketplaceConfig::load(self.config.as_deref())?;
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.bind_all {
            config.bind_all = true;
        }
        if let Some(dist) = &self.dist {
            config.dist_dir = dist.clone();
        }
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Graceful shutdown signal
// ---------------------------------------------------------------------------

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received SIGINT, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                error!(error = %e, "Cannot listen for SIGTERM");
                let _ = ctrl_c.await;
                info!("Received SIGINT, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
        info!("Received Ctrl+C, shutting down...");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("marketplace=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "marketplace", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match cli.settings() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let api: SharedCatalog = match &cli.fixture {
        Some(path) => match StaticCatalog::from_file(path) {
            Ok(catalog) => {
                info!(path = %path.display(), samples = catalog.len(), "Serving fixture catalog");
                Arc::new(catalog)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Cannot load fixture");
                return ExitCode::FAILURE;
            }
        },
        None => match HttpCatalog::new(&config.api_base_url, config.request_timeout_secs) {
            Ok(client) => client.shared(),
            Err(e) => {
                error!(error = %e, "Cannot build API client");
                return ExitCode::FAILURE;
            }
        },
    };

    let state = Arc::new(AppState {
        api,
        api_base: config.api_base_url.clone(),
        template: load_template(&config.dist_dir),
    });
    let app = build_router(state, &config.dist_dir);

    // Bind address: 127.0.0.1 by default, --bind-all for 0.0.0.0
    let bind_addr = if config.bind_all { "0.0.0.0" } else { "127.0.0.1" };
    let listener = match tokio::net::TcpListener::bind((bind_addr, config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(port = config.port, error = %e, "Could not bind to port");
            return ExitCode::FAILURE;
        }
    };

    info!(api = config.api_base_url.as_str(), "Catalog API");
    info!(dist = %config.dist_dir.display(), "Serving front-end");
    info!(port = config.port, "http://localhost:{}", config.port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    info!("Server stopped");
    ExitCode::SUCCESS
}
