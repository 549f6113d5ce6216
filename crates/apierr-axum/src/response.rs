//! JSON error bodies and the handler error type.
use apierr::{ApiError, ConversionError, CustomError, Dispatcher};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::metrics;
use crate::writer::AxumResponseWriter;

/// JSON body written for a [`CustomError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JsonApiError {
    pub code: u16,
    /// User-facing message
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub error_code: String,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
}

impl ApiError for JsonApiError {
    fn from_custom_error(&mut self, err: &CustomError) -> Result<(), ConversionError> {
        let status = err.status_code();
        if !(100..=599).contains(&status) {
            return Err(ConversionError::new(format!(
                "status {} is not a valid HTTP status",
                status
            )));
        }

        self.code = status;
        self.message = err.user_message().to_string();
        self.error_type = err.err_type().to_string();
        self.error_code = err.err_code().to_string();
        self.retryable = err.retryable();
        self.details = err
            .metadata()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(())
    }
}

/// Handler error: any error, rendered through the dispatcher.
///
/// Handlers return `Result<T, HttpError>` and use `?` on anything that
/// converts into `anyhow::Error`.
#[derive(Debug)]
pub struct HttpError(anyhow::Error);

impl HttpError {
    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }
}

impl<E> From<E> for HttpError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let err: &(dyn std::error::Error + 'static) = self.0.as_ref();
        let mut writer = AxumResponseWriter::new();
        let outcome = Dispatcher::new(JsonApiError::default).dispatch(err, &mut writer);
        metrics::record(outcome);
        writer.into_response()
    }
}
