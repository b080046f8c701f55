//! Palaver REST API entry point.
//!
//! Binary name: `palaver`
//!
//! Parses CLI arguments, initializes the database and chat service, then
//! starts the HTTP server.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use state::AppState;

/// Conversational chat service relaying to an LLM completion provider.
#[derive(Parser)]
#[command(name = "palaver", version, about)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "PALAVER_HOST")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000, env = "PALAVER_PORT")]
    port: u16,

    /// Data directory holding the database and config.toml.
    /// Defaults to ~/.palaver.
    #[arg(long, env = "PALAVER_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 => "info",
        1 => "info,palaver=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Initialize application state (config, DB, chat service)
    let state = AppState::init(cli.data_dir).await?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Palaver API listening");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
