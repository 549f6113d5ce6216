//! `ResponseWriter` backed by an axum response.
use apierr::{ResponseWriter, WriteError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

/// Holds the single JSON response produced by a dispatch.
#[derive(Default)]
pub struct AxumResponseWriter {
    response: Option<Response>,
}

impl AxumResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }

    /// The written response, or a bare 500 if nothing was written.
    pub fn into_response(self) -> Response {
        self.response
            .unwrap_or_else(|| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}

impl ResponseWriter for AxumResponseWriter {
    fn write_response(&mut self, status_code: u16, body: Value) -> Result<(), WriteError> {
        if self.response.is_some() {
            return Err(WriteError::AlreadyWritten);
        }
        let status = StatusCode::from_u16(status_code)
            .map_err(|e| WriteError::Rejected(format!("status {}: {}", status_code, e)))?;
        self.response = Some((status, Json(body)).into_response());
        Ok(())
    }
}
