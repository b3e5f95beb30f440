//! Bank ledger API server

use std::sync::Arc;

use account_service::{AccountRepository, AccountServiceConfig, InMemoryAccountRepository};
use api_gateway::config::AppConfig;
use api_gateway::controller::BankController;
use api_gateway::{router, AppState};
use clap::Parser;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{debug, error, info, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Bank ledger API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening address, overrides HOST and PORT
    #[clap(short, long)]
    addr: Option<String>,

    /// Log every account creation and deposit at info level
    #[clap(short, long)]
    transaction_logging: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging with debug level when DEBUG=1 env var is set
    let env = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let log_level = if env == "1" { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    let json_logs = std::env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);
    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    debug!("Debug logging enabled");

    let mut repo_config = AccountServiceConfig::from_env();
    repo_config.transaction_logging |= args.transaction_logging;

    let app_config = AppConfig::new();
    let addr = match args.addr {
        Some(addr) => addr.parse()?,
        None => app_config.socket_addr()?,
    };

    info!(
        "Starting bank ledger with capacity {}, transaction logging: {}",
        repo_config.initial_capacity, repo_config.transaction_logging
    );

    let repo: Arc<dyn AccountRepository> =
        Arc::new(InMemoryAccountRepository::with_config(&repo_config));
    let state = Arc::new(AppState {
        controller: BankController::new(repo),
    });

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Run until interrupt signal
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Error waiting for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install signal handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
