use serde_json::Value;
use tracing::warn;

use crate::{metrics::MALFORMED_PAYLOADS_TOTAL, Error, Result};

pub const FIRING: &str = "firing";

/// Parsed Alertmanager-style webhook body.
///
/// Only the presence of `alerts` and each alert's `status` are checked;
/// every other field of the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    alerts: Option<Value>,
}

/// Status of a single alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertStatus {
    Firing,
    Other(String),
}

impl Notification {
    /// Parse a request body. Anything that is not a JSON object carrying an
    /// `alerts` key yields a notification without alerts.
    pub fn from_body(body: &[u8]) -> Self {
        if body.is_empty() {
            return Self::default();
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                warn!("Ignoring webhook body that is not valid JSON: {}", e);
                MALFORMED_PAYLOADS_TOTAL.inc();
                Self::default()
            }
        }
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                alerts: map.remove("alerts"),
            },
            _ => Self::default(),
        }
    }

    /// The alerts in payload order. An absent `alerts` key, an empty
    /// string or an empty object is an empty list; any other value that is
    /// not an array is an error.
    pub fn alerts(&self) -> Result<&[Value]> {
        match &self.alerts {
            None => Ok(&[]),
            Some(Value::Array(alerts)) => Ok(alerts),
            Some(Value::String(s)) if s.is_empty() => Ok(&[]),
            Some(Value::Object(map)) if map.is_empty() => Ok(&[]),
            Some(other) => Err(Error::Validation(format!(
                "alerts must be an array, got {}",
                kind(other)
            ))),
        }
    }
}

impl AlertStatus {
    /// Read the `status` of the alert at `index`. A missing key is a fault,
    /// not a non-firing alert.
    pub fn of(index: usize, alert: &Value) -> Result<Self> {
        let fields = alert.as_object().ok_or_else(|| {
            Error::Validation(format!(
                "alert at index {} must be an object, got {}",
                index,
                kind(alert)
            ))
        })?;

        match fields.get("status") {
            None => Err(Error::MissingStatus { index }),
            Some(Value::String(s)) if s == FIRING => Ok(AlertStatus::Firing),
            Some(Value::String(s)) => Ok(AlertStatus::Other(s.clone())),
            Some(other) => Ok(AlertStatus::Other(other.to_string())),
        }
    }

    pub fn is_firing(&self) -> bool {
        matches!(self, AlertStatus::Firing)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
