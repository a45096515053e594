//! Amber Safe - Main entry point
//!
//! Terminal front-end for the emergency contact manager: loads configuration,
//! wires the contact store and geolocation provider into the application, then
//! dispatches one command per input line until `quit` or end of input.

use amber_safe::app::{Command, ContactApp};
use amber_safe::console::{parse_line, ConsoleInput, ConsoleSurface, StdinConfirm, HELP};
use amber_safe::geolocation::{FixedGeolocationProvider, GeolocationProvider, IpGeolocationProvider};
use amber_safe::repositories::{ContactRepository, RemoteContactRepository};
use amber_safe::{Config, ContactStoreClient};
use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging (stderr only, stdout is the rendered surface)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
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

    info!("Using contact store at {}", config.api_url);

    let contacts = Arc::new(RemoteContactRepository::new(ContactStoreClient::new(&config)))
        as Arc<dyn ContactRepository>;

    let geolocation: Arc<dyn GeolocationProvider> = match config.fixed_position {
        Some(coordinates) => {
            info!("Using fixed position {}", coordinates);
            Arc::new(FixedGeolocationProvider::new(coordinates))
        }
        None => {
            info!("Using geolocation lookup at {}", config.geolocation_url);
            Arc::new(IpGeolocationProvider::new(
                config.geolocation_url.clone(),
                Duration::from_secs(config.request_timeout),
            ))
        }
    };

    let surface = Arc::new(ConsoleSurface::new());
    let app = ContactApp::new(contacts, geolocation, surface.clone(), Arc::new(StdinConfirm))
        .with_position_options(config.position_options());

    println!("{}", HELP);
    app.dispatch(Command::Refresh).await;

    while let Some(line) = read_line().await? {
        match parse_line(&line) {
            ConsoleInput::Dispatch(command) => app.dispatch(command).await,
            ConsoleInput::DeleteRow(row) => match surface.delete_command(row) {
                Some(command) => app.dispatch(command).await,
                None => println!("No contact on row {}", row),
            },
            ConsoleInput::Help => println!("{}", HELP),
            ConsoleInput::Quit => break,
            ConsoleInput::Empty => {}
            ConsoleInput::Invalid(message) => println!("{}", message),
        }
    }

    info!("Amber Safe shutdown complete");
    Ok(())
}

/// Read one line from stdin on the blocking pool; `None` at end of input.
///
/// Shares the process-wide stdin buffer with the confirmation prompt.
async fn read_line() -> Result<Option<String>> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok::<_, io::Error>((read > 0).then_some(line))
    })
    .await
    .context("stdin reader task failed")?
    .context("failed to read from stdin")
}
