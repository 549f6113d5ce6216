//! Prometheus counters for dispatched error responses.
use apierr::Outcome;
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    pub static ref ERROR_RESPONSES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "apierr_responses_total",
        "Error responses written by the dispatcher",
        &["status", "outcome"]
    )
    .unwrap();
}

pub fn record(outcome: Outcome) {
    let status = outcome.status().to_string();
    ERROR_RESPONSES_TOTAL
        .with_label_values(&[status.as_str(), outcome.as_str()])
        .inc();
}

/// Renders the default registry in the text exposition format.
pub fn encode() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
