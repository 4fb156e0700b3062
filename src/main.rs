//! Contact Book - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{AddressBook, Config, ContactServiceImpl, Dispatcher};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so replies on stdout stay clean)
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(page_size = config.page_size, "Starting contact book session");

    let service = ContactServiceImpl::new(AddressBook::new());
    let mut dispatcher = Dispatcher::new(service, &config);

    let stdin = io::stdin();
    dispatcher.run(stdin.lock(), io::stdout().lock())?;

    info!(
        contacts = dispatcher.service().book().len(),
        "Contact book session ended"
    );
    Ok(())
}
