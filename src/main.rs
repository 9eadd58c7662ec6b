use std::{io, path::Path};

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pexels::{Client, Config};

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Pexels(#[from] pexels::Error),
}

type Result<T> = core::result::Result<T, Error>;

/// Loads `config.json` and `.env` from `config_folder` when they exist.
fn configure<P: AsRef<Path>>(config_folder: P) -> Result<Config> {
    let config_folder = config_folder.as_ref();

    let env_path = config_folder.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path).map_err(|err| match err {
            dotenvy::Error::Io(err) => err,

            err => io::Error::new(io::ErrorKind::InvalidData, err),
        })?;
    }

    let config_path = config_folder.join("config.json");
    if !config_path.exists() {
        return Ok(Config::default());
    }

    info!("Using configuration from {}", config_path.display());

    Ok(Config::from_path(&config_path)?)
}

fn run() -> Result<()> {
    let config = match dirs::config_dir() {
        Some(dir) => configure(dir.join("Pexels"))?,

        None => Config::default(),
    };

    let client = Client::from_env_with_config(config)?;

    let result = client.search_photos("waves", 15, 1)?;
    if result.page() == 0 {
        info!("Search returned no page information");
    }

    println!("{:#?}", result);
    println!(
        "{} requests remaining this period",
        client.remaining_requests()
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("{}", e);
    }
}
