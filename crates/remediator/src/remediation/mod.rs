//! Remediation Module
//!
//! The action taken for each firing alert. The server only sees the
//! [`RemediationExecutor`] trait, so the real command can be swapped for a
//! fake in tests.

pub mod command;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

pub use command::CommandExecutor;

/// Result of one remediation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationOutcome {
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
}

/// Runs the remediation for one firing alert.
///
/// Takes no arguments: nothing from the alert is passed to the remediation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemediationExecutor: Send + Sync {
    /// Human readable description, used in logs
    fn describe(&self) -> String;

    /// Run to completion. No timeout is applied.
    async fn remediate(&self) -> Result<RemediationOutcome>;
}
