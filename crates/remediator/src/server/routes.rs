use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::{
    receivers::{AlertStatus, Notification},
    Server,
};
use crate::{metrics, Result};

pub async fn health() -> &'static str {
    "OK"
}

pub async fn export_metrics() -> Response {
    match metrics::gather_metrics() {
        Ok(text) => text.into_response(),
        Err(e) => {
            error!("Error encoding metrics: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Alertmanager webhook. Runs the remediation once per firing alert, in
/// payload order, and answers `200 OK` whatever the remediations did.
pub async fn webhook(State(server): State<Arc<Server>>, body: Bytes) -> Result<&'static str> {
    let notification = Notification::from_body(&body);
    let alerts = notification.alerts()?;

    if alerts.is_empty() {
        debug!("Webhook carried no alerts");
        return Ok("OK");
    }

    info!("Received webhook with {} alerts", alerts.len());

    let mut guard = None;
    for (index, alert) in alerts.iter().enumerate() {
        metrics::ALERTS_RECEIVED_TOTAL.inc();

        let status = AlertStatus::of(index, alert)?;
        if !status.is_firing() {
            debug!("Skipping alert {} with status {:?}", index, status);
            continue;
        }

        if guard.is_none() {
            guard = Some(server.remediation_lock.lock().await);
        }

        info!("Alert {} is firing, running remediation", index);
        let outcome = server.executor.remediate().await;
        metrics::record_remediation(&outcome);

        match outcome {
            Ok(o) if o.success => debug!("Remediation for alert {} succeeded", index),
            Ok(o) => warn!(
                "Remediation for alert {} exited unsuccessfully (code {:?})",
                index, o.exit_code
            ),
            Err(e) => warn!("Remediation for alert {} could not run: {}", index, e),
        }
    }

    Ok("OK")
}
