//! apierr: structured API errors and a framework-agnostic dispatcher
//!
//! This crate holds the runtime half of the error pipeline:
//!
//! - [`CustomError`], the error value carried by generated constructors
//! - chain traversal that finds a [`CustomError`] behind any number of wraps
//! - the [`Dispatcher`], which turns an arbitrary error into exactly one
//!   response through caller-supplied conversion and writing
//!
//! Error constructors are normally generated from a YAML schema by the
//! `apierr-gen` tool; the built-in set lives in [`defaults`].
//!
//! # Example
//!
//! ```ignore
//! use apierr::{make_handler, CustomError};
//!
//! let handler = make_handler(MyApiError::default, || MyWriter::new(ctx));
//! let err = CustomError::new(404, "user 7 not found", "Not found", "NOT_FOUND", "NF_404", false);
//! handler(&err);
//! ```

pub mod chain;
#[allow(clippy::new_without_default, clippy::useless_format)]
pub mod defaults;
pub mod dispatch;
pub mod error;

pub use chain::{chain, find_custom_error, Chain};
pub use dispatch::{
    make_handler, ApiError, ApiErrorCreator, ConversionError, Dispatcher, Outcome,
    ResponseWriter, WriteError, CONVERSION_FAILURE_MESSAGE, INTERNAL_ERROR_MESSAGE,
};
pub use error::{BoxError, CustomError, Metadata};
