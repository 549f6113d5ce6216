//! Error dispatch: arbitrary error in, exactly one response out.
//!
//! The dispatcher does not know about any web framework. Callers plug in:
//! - an [`ApiErrorCreator`] producing a fresh external representation
//! - a [`ResponseWriter`] performing the single write
//!
//! Errors without a [`CustomError`] in their chain are never described to the
//! client; they always become the same generic 500 body.

use crate::chain::find_custom_error;
use crate::error::CustomError;
use serde::Serialize;
use serde_json::{json, Value};
use std::error::Error as StdError;
use thiserror::Error;

/// Status written when no usable error value is available.
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Body text for errors that carry no [`CustomError`].
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body text when a converter rejects a [`CustomError`].
pub const CONVERSION_FAILURE_MESSAGE: &str = "Failed to process error.";

/// A converter could not populate itself from a valid error value.
#[derive(Debug, Error)]
#[error("error conversion failed: {0}")]
pub struct ConversionError(String);

impl ConversionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Failure reported by a [`ResponseWriter`].
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("response write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("response already written")]
    AlreadyWritten,
    #[error("response rejected: {0}")]
    Rejected(String),
}

/// Abstracts response writing for different frameworks.
pub trait ResponseWriter {
    fn write_response(&mut self, status_code: u16, body: Value) -> Result<(), WriteError>;
}

impl<W: ResponseWriter + ?Sized> ResponseWriter for &mut W {
    fn write_response(&mut self, status_code: u16, body: Value) -> Result<(), WriteError> {
        (**self).write_response(status_code, body)
    }
}

/// External representation of an error, populated from a [`CustomError`].
pub trait ApiError: Serialize {
    fn from_custom_error(&mut self, err: &CustomError) -> Result<(), ConversionError>;
}

/// Factory for fresh [`ApiError`] instances.
pub trait ApiErrorCreator {
    type Output: ApiError;

    fn create(&self) -> Self::Output;
}

impl<F, T> ApiErrorCreator for F
where
    F: Fn() -> T,
    T: ApiError,
{
    type Output = T;

    fn create(&self) -> T {
        self()
    }
}

/// What a single dispatch wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The error value was converted and written with its own status.
    Converted { status: u16 },
    /// An error value was found but could not be converted.
    ConversionFailed,
    /// No error value anywhere in the chain.
    Unrecognized,
}

impl Outcome {
    /// Status code of the response that was written.
    pub fn status(&self) -> u16 {
        match self {
            Outcome::Converted { status } => *status,
            Outcome::ConversionFailed | Outcome::Unrecognized => INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Converted { .. } => "converted",
            Outcome::ConversionFailed => "conversion_failed",
            Outcome::Unrecognized => "unrecognized",
        }
    }
}

/// Converts errors into responses through a pluggable [`ApiErrorCreator`].
#[derive(Debug, Clone)]
pub struct Dispatcher<C> {
    creator: C,
}

impl<C: ApiErrorCreator> Dispatcher<C> {
    pub fn new(creator: C) -> Self {
        Self { creator }
    }

    /// Writes exactly one response for `err` through `writer`.
    ///
    /// Never fails: writer errors are logged and dropped.
    pub fn dispatch<W>(&self, err: &(dyn StdError + 'static), writer: &mut W) -> Outcome
    where
        W: ResponseWriter + ?Sized,
    {
        let (outcome, body) = match find_custom_error(err) {
            Some(custom) => match self.convert(custom) {
                Ok(body) => (
                    Outcome::Converted {
                        status: custom.status_code(),
                    },
                    body,
                ),
                Err(conversion) => {
                    tracing::warn!(
                        error = %conversion,
                        original = %err,
                        "failed to process error"
                    );
                    (
                        Outcome::ConversionFailed,
                        json!({ "error": CONVERSION_FAILURE_MESSAGE }),
                    )
                }
            },
            None => {
                tracing::debug!(error = %err, "no api error in chain, responding with 500");
                (Outcome::Unrecognized, json!({ "error": INTERNAL_ERROR_MESSAGE }))
            }
        };

        if let Err(write) = writer.write_response(outcome.status(), body) {
            tracing::warn!(error = %write, status = outcome.status(), "failed to write error response");
        }
        outcome
    }

    fn convert(&self, custom: &CustomError) -> Result<Value, ConversionError> {
        let mut api_err = self.creator.create();
        api_err.from_custom_error(custom)?;
        serde_json::to_value(&api_err).map_err(|e| ConversionError::new(e.to_string()))
    }
}

/// Builds an error handler that writes each error through a fresh writer.
pub fn make_handler<C, W, F>(creator: C, writer_factory: F) -> impl Fn(&(dyn StdError + 'static))
where
    C: ApiErrorCreator,
    W: ResponseWriter,
    F: Fn() -> W,
{
    let dispatcher = Dispatcher::new(creator);
    move |err: &(dyn StdError + 'static)| {
        let mut writer = writer_factory();
        dispatcher.dispatch(err, &mut writer);
    }
}
