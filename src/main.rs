//! Site URL router.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ listener ─▶ http server ─▶ route table    │
//!                           │              (request id,    (exact match)   │
//!                           │               trace, timeout)      │         │
//!                           │                                    ▼         │
//!     Client Response       │                             ┌────────────┐   │
//!     ◀─────────────────────┼──────────────────────────── │   view     │   │
//!                           │         404 / 301 when      │  handler   │   │
//!                           │         nothing matches     └────────────┘   │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use pages_router::config::load_or_default;
use pages_router::lifecycle::startup;
use pages_router::observability::logging;
use pages_router::views::Views;
use pages_router::TableKind;

#[derive(Parser)]
#[command(name = "pages-router")]
#[command(about = "Serve the site's URL table", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `routing.table`.
    #[arg(short, long)]
    table: Option<TableKind>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(table) = cli.table {
        config.routing.table = table;
    }
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("pages-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        table = %config.routing.table,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    startup::run(config, Views::placeholder()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
