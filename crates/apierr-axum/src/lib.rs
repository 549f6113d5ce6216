//! apierr-axum: axum bindings for the apierr dispatcher
//!
//! - [`AxumResponseWriter`] captures the dispatcher's single write
//! - [`JsonApiError`] is the JSON body for a `CustomError`
//! - [`HttpError`] lets handlers return any error and still get a
//!   well-formed response
//!
//! The binary serves a demo app exercising each error shape.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod response;
pub mod writer;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use response::{HttpError, JsonApiError};
pub use writer::AxumResponseWriter;

pub fn create_app() -> Router {
    Router::new()
        .route("/simple", get(handlers::simple))
        .route("/complex", get(handlers::complex))
        .route("/test", get(handlers::bad_request))
        .route("/wrap", get(handlers::wrap))
        .route("/double", get(handlers::double))
        .route("/resources/{name}", get(handlers::resource))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::prometheus_metrics))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;

    tracing::info!("apierr demo listening on {}", config.addr);
    axum::serve(listener, create_app()).await?;
    Ok(())
}
