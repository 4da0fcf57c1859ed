//! Command Executor
//!
//! Runs a fixed external program, by default `ansible-playbook restart-nginx.yml`.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::{RemediationExecutor, RemediationOutcome};
use crate::{config::RemediationConfig, Error, Result};

/// Executes one fixed program with fixed arguments
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    program: String,
    args: Vec<String>,
}

impl CommandExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl From<&RemediationConfig> for CommandExecutor {
    fn from(config: &RemediationConfig) -> Self {
        config
            .args
            .iter()
            .fold(Self::new(config.program.clone()), |executor, arg| {
                executor.with_arg(arg.clone())
            })
    }
}

#[async_trait]
impl RemediationExecutor for CommandExecutor {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn remediate(&self) -> Result<RemediationOutcome> {
        debug!("Running remediation command: {}", self.describe());

        // stdio is inherited, the command's output goes to our own streams
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|e| Error::Execution(format!("failed to start '{}': {}", self.program, e)))?;

        Ok(RemediationOutcome {
            exit_code: status.code(),
            success: status.success(),
        })
    }
}
