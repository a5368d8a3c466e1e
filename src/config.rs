use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "airbnb_price_model.json";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            model_path: env::var("PRICE_MODEL_PATH")
                .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
                .into(),
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
                .parse()
                .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?,
            max_workers: parse_max_workers(
                &env::var("MAX_WORKERS").unwrap_or_else(|_| "8".to_string()),
            )?,
        })
    }
}

/// astra needs at least one worker to serve anything.
fn parse_max_workers(raw: &str) -> Result<usize> {
    let workers: usize = raw
        .trim()
        .parse()
        .context("MAX_WORKERS must be a positive number")?;
    ensure!(workers > 0, "MAX_WORKERS must be a positive number, got 0");
    Ok(workers)
}
