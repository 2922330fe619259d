//! Rota Certa route alert service.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!   Planner / Driver     │                 ROTA CERTA                   │
//!   ─────────────────────┼─▶ http::server ──▶ http::handlers            │
//!                        │        │                 │                   │
//!                        │        ▼                 ▼                   │
//!                        │   http::pages     routes::RouteService       │
//!                        │   (public/)         │          │             │
//!                        │                     ▼          ▼             │
//!                        │           analysis::evaluate  RouteStore     │
//!                        │                     │                        │
//!                        │                     ▼                        │
//!                        │              dataset (static JSON)           │
//!                        │                                              │
//!                        │   config · observability · lifecycle         │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use rota_certa::config::load_or_default;
use rota_certa::lifecycle::{signals, startup};
use rota_certa::observability::logging;
use rota_certa::Shutdown;

#[derive(Parser)]
#[command(name = "rota-certa")]
#[command(about = "Route alert service for truck planners and drivers", long_about = None)]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when it is absent.
    #[arg(short, long, default_value = "rota.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(&args.config)?;

    logging::init_logging(&config.observability)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %args.config.display(),
        "rota-certa starting"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
