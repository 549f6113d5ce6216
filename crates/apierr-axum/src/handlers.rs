//! Demo handlers, one per error shape.
use anyhow::{anyhow, Context};
use apierr::defaults::new_not_found_error;
use apierr::CustomError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::metrics;
use crate::HttpError;

type ApiResult = Result<Json<Value>, HttpError>;

/// Plain error: no `CustomError` anywhere.
pub async fn simple() -> ApiResult {
    Err(anyhow!("simple error").into())
}

/// `CustomError` wrapping a lower-layer error.
pub async fn complex() -> ApiResult {
    let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "complex error");
    Err(CustomError::from_error(cause, 401, "Unauthorized", "AUTH_ERROR", "AUTH_401", false).into())
}

pub async fn bad_request() -> ApiResult {
    Err(CustomError::new(
        400,
        "Bad Request",
        "Invalid request format",
        "BAD_REQUEST",
        "BR_400",
        false,
    )
    .into())
}

/// `CustomError` behind one layer of context.
pub async fn wrap() -> ApiResult {
    let result: Result<Json<Value>, CustomError> = Err(CustomError::new(
        400,
        "Wrapped Bad Request",
        "Invalid data",
        "BAD_REQUEST",
        "BR_400",
        false,
    ));
    Ok(result.context("wrap")?)
}

/// `CustomError` behind two layers of context.
pub async fn double() -> ApiResult {
    let result = lookup().context("inner error").context("outer error");
    Ok(result?)
}

pub async fn resource(Path(name): Path<String>) -> ApiResult {
    let mut err = new_not_found_error(name.clone());
    err.set_metadata("resource", name);
    Err(err.into())
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })),
    )
}

pub async fn prometheus_metrics() -> impl IntoResponse {
    match metrics::encode() {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

fn lookup() -> Result<Json<Value>, CustomError> {
    Err(CustomError::new(
        404,
        "Resource not found",
        "The requested resource does not exist",
        "NOT_FOUND",
        "NF_404",
        false,
    ))
}
