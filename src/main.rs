use anyhow::{Context, Result};
use astra::Server;
use listing_price::app::AppState;
use listing_price::config::Config;
use listing_price::router::respond;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 1️⃣ Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_price=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "configuration loaded");

    // 2️⃣ Load the model once; every worker shares it
    let app = AppState::load(&config.model_path);

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| respond(req, &app));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        return Err(e).context("server error");
    }

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
