//! Binary entrypoint for the apierr demo server.
use apierr_axum::{run, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Listen address can be overridden with APIERR_ADDR
    let config = Config::from_env();
    run(&config).await
}
