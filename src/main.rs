use std::sync::Arc;

use anyhow::Result;
use kantnergasse::{
    config::{self, Config},
    logger::setup_logger,
    web::{start_http_server, AppState},
};
use log::{error, info};
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = match config::read_config() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("Error: {:?}", err);
            return Err(err);
        }
    };

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            info!("Received signal {}, shutting down", signal);
            let _ = shutdown_tx.send(());
        }
    });

    if let Err(err) = start_http_server(AppState { config }, shutdown_rx).await {
        error!("Error: {:?}", err);
        return Err(err);
    }

    Ok(())
}
