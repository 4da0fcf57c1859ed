use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::remediation::RemediationOutcome;

lazy_static! {
    pub static ref ALERTS_RECEIVED_TOTAL: IntCounter = IntCounter::new(
        "alert_remediator_alerts_received_total",
        "Total number of alerts received in webhook payloads."
    )
    .expect("valid metric definition");
    pub static ref REMEDIATIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new(
            "alert_remediator_remediations_total",
            "Total number of remediation runs, by outcome."
        ),
        &["outcome"]
    )
    .expect("valid metric definition");
    pub static ref MALFORMED_PAYLOADS_TOTAL: IntCounter = IntCounter::new(
        "alert_remediator_malformed_payloads_total",
        "Total number of webhook bodies that were not valid JSON."
    )
    .expect("valid metric definition");
    pub static ref REGISTRY: Registry = {
        let registry = Registry::new();
        registry
            .register(Box::new(ALERTS_RECEIVED_TOTAL.clone()))
            .expect("Failed to register ALERTS_RECEIVED_TOTAL");
        registry
            .register(Box::new(REMEDIATIONS_TOTAL.clone()))
            .expect("Failed to register REMEDIATIONS_TOTAL");
        registry
            .register(Box::new(MALFORMED_PAYLOADS_TOTAL.clone()))
            .expect("Failed to register MALFORMED_PAYLOADS_TOTAL");
        registry
    };
}

pub fn record_remediation(outcome: &crate::Result<RemediationOutcome>) {
    let label = match outcome {
        Ok(o) if o.success => "success",
        Ok(_) => "failure",
        Err(_) => "error",
    };
    REMEDIATIONS_TOTAL.with_label_values(&[label]).inc();
}

// Function to gather metrics for exposition
pub fn gather_metrics() -> crate::Result<String> {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| crate::Error::Internal(e.to_string()))
}
