//! Azure Functions custom handler serving the book list.
//!
//! The Functions host forwards `BookListGQL` HTTP triggers to the port it passes in
//! `FUNCTIONS_CUSTOMHANDLER_PORT`. Run locally, the server listens on `127.0.0.1:7071`.

use book_list::{Config, run};
use dotenvy::dotenv;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// # Errors
/// Returns an error if the configuration is invalid or the server cannot be started.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing `.env` is fine; the real environment is used as is.
    let _unused = dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    info!(?config, "Loaded configuration");

    run(config).await?;
    Ok(())
}
