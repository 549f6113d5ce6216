//! The error value produced by generated constructors.
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Boxed error accepted as a cause.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Free-form metadata attached to a [`CustomError`].
pub type Metadata = HashMap<String, Value>;

/// A standardized API error.
///
/// Everything except the metadata map is fixed at construction. Metadata may
/// be appended until the error is handed to a dispatcher.
#[derive(Debug)]
pub struct CustomError {
    cause: Option<BoxError>,
    status_code: u16,
    message: String,
    user_message: String,
    err_type: String,
    err_code: String,
    retryable: bool,
    metadata: Metadata,
}

/// Cause synthesized by [`CustomError::new`].
#[derive(Debug)]
struct Synthesized(String);

impl fmt::Display for Synthesized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.0)
    }
}

impl Error for Synthesized {}

impl CustomError {
    /// Creates an error whose cause is synthesized from `message`.
    pub fn new(
        status_code: u16,
        message: impl Into<String>,
        user_message: impl Into<String>,
        err_type: impl Into<String>,
        err_code: impl Into<String>,
        retryable: bool,
    ) -> Self {
        let message = message.into();
        Self {
            cause: Some(Box::new(Synthesized(message.clone()))),
            status_code,
            message,
            user_message: user_message.into(),
            err_type: err_type.into(),
            err_code: err_code.into(),
            retryable,
            metadata: Metadata::new(),
        }
    }

    /// Wraps an existing error. The message is the cause's rendered text.
    pub fn from_error(
        cause: impl Into<BoxError>,
        status_code: u16,
        user_message: impl Into<String>,
        err_type: impl Into<String>,
        err_code: impl Into<String>,
        retryable: bool,
    ) -> Self {
        let cause = cause.into();
        Self {
            message: cause.to_string(),
            cause: Some(cause),
            status_code,
            user_message: user_message.into(),
            err_type: err_type.into(),
            err_code: err_code.into(),
            retryable,
            metadata: Metadata::new(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Internal message, not meant for end users.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message safe to show to end users.
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn err_type(&self) -> &str {
        &self.err_type
    }

    pub fn err_code(&self) -> &str {
        &self.err_code
    }

    pub fn retryable(&self) -> bool {
        self.retryable
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Inserts or replaces a metadata entry.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Builder-style [`set_metadata`](Self::set_metadata).
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_metadata(key, value);
        self
    }

    pub fn get_metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CustomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
