//! Compiles the rendered fixture against the `apierr` runtime.
//!
//! `tests/fixtures/errors.rs` is the checked-in output for
//! `tests/fixtures/errors.yml`; it must stay identical to a fresh render.

use apierr_gen::{load, render};
use std::error::Error;
use std::fs;
use std::path::Path;

#[allow(dead_code, clippy::new_without_default, clippy::useless_format)]
mod generated {
    include!("fixtures/errors.rs");
}

use generated::*;

#[test]
fn test_checked_in_module_matches_render() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let file = load(dir.join("errors.yml")).unwrap();
    let rendered = render(&file).unwrap();
    let checked_in = fs::read_to_string(dir.join("errors.rs")).unwrap();

    assert_eq!(rendered, checked_in, "regenerate tests/fixtures/errors.rs");
}

#[test]
fn test_constructor_with_args() {
    let err = QuotaExceededError::new(100, "acme".to_string());

    assert_eq!(*err.limit(), 100);
    assert_eq!(err.account(), "acme");
    assert_eq!(err.to_string(), "quota of 100 requests exceeded for \"acme\"");

    let base = err.as_custom_error();
    assert_eq!(base.status_code(), 429);
    assert_eq!(base.err_type(), ERR_TYPE_RATE_LIMITED);
    assert_eq!(base.err_code(), ERR_CODE_QTA_429);
    assert!(base.retryable());
    assert!(err.source().is_some());
}

#[test]
fn test_free_constructor() {
    let err = new_user_not_found_error(7);

    assert_eq!(err.message(), "user 7 not found");
    assert_eq!(err.user_message(), "The requested user could not be found.");
    assert_eq!(err.err_type(), ERR_TYPE_NOT_FOUND);
    assert!(!err.retryable());
}

#[test]
fn test_constructor_without_args() {
    let err: apierr::CustomError = MaintenanceError::new().into();

    assert_eq!(err.message(), "maintenance window active, literal {braces} kept");
    assert_eq!(err.user_message(), "We'll be back shortly.");
    assert_eq!(err.status_code(), 503);
    assert_eq!(ERROR_MAINTENANCE, "Maintenance");
}

#[test]
fn test_generated_type_is_found_in_chain() {
    let err = OrderNotFoundError::new("ORD-1".to_string());
    let found = apierr::find_custom_error(&err).unwrap();

    assert_eq!(found.err_code(), ERR_CODE_ORD_404);
    assert_eq!(found.message(), "order ORD-1 not found");
}
