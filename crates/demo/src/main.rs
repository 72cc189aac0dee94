mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ordertrail_core::{load_config, validate_config, AutoAdvanceFeed, Config, TrackingSession};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("ORDERTRAIL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; a missing file falls back to the built-in demo order
    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No config file at {:?}, using defaults", config_path);
        Config::default()
    };

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("ordertrail demo v{}", VERSION);
    info!(
        "Tracking order {} from {}",
        config.order.id, config.order.restaurant.name
    );

    let order = config.order.to_order_info();
    let feed = AutoAdvanceFeed::new(&config.autoadvance);
    let session = TrackingSession::new(order, config.autoadvance.start, Box::new(feed));

    let mut rx = session.subscribe();
    session.start().await;

    // Render the starting point before the first status change arrives.
    println!("{}", render::render_snapshot(&rx.borrow().clone()));

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow().clone();
                println!("{}", render::render_snapshot(&snapshot));
                if snapshot.status.is_terminal() {
                    info!("Order delivered, shutting down");
                    break;
                }
            }
            _ = tokio::time::sleep(Duration::from_millis(200)), if !session.status().running => {
                info!("Status feed ended");
                break;
            }
            _ = shutdown_signal() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    if session.status().running {
        session.stop().await;
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
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
