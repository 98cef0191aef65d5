//! NetBox Export
//!
//! Interactive, single-shot export of NetBox inventory to CSV:
//! - All devices
//! - All interfaces
//! - Interfaces on one device (by device ID)
//! - Devices in one rack (by rack name)
//!
//! Output lands in `output/<YYYY.MM.DD>-<suffix>.csv`.

mod config;
mod dispatcher;
mod error;
mod menu;
mod run;
mod writer;

use crate::config::{DEFAULT_ENV_FILE, ExportConfig};
use crate::error::ExportError;
use netbox_client::NetBoxClient;
use std::io;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ExportError> {
    // Diagnostics go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = ExportConfig::load(Path::new(DEFAULT_ENV_FILE))?;

    info!("Configuration:");
    info!("  NetBox URL: {}", config.api_url);
    info!("  Output directory: {}", config.output_dir.display());

    let client = NetBoxClient::new(config.api_url.clone(), config.api_token.clone())?;

    let mut input = io::stdin().lock();
    let mut out = io::stdout();
    let outcome = run::run(&client, &config.output_dir, &mut input, &mut out).await?;

    info!("Finished: {:?}", outcome);
    Ok(())
}
