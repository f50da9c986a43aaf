//! Satchel console client.
//!
//! ```bash
//! # built-in catalog, logs under the platform cache directory
//! cargo run -p satchel-client
//!
//! # shipped content, logs on stderr
//! SATCHEL_DATA_DIR=data SATCHEL_LOG_STDERR=1 cargo run -p satchel-client
//! ```

use std::io;

use anyhow::Result;
use satchel_client::{ClientConfig, Console, build_session, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref(), config.log_stderr)?;

    tracing::info!("Starting satchel client");
    tracing::info!("Data directory: {:?}", config.data_dir);

    let session = build_session(&config)?;

    let stdin = io::stdin();
    let mut console = Console::new(session, stdin.lock(), io::stdout());
    console.run()?;

    tracing::info!(
        health = console.session().state().health.current(),
        carried = console.session().state().inventory.len(),
        "Client shutdown complete"
    );
    Ok(())
}
