use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5001";
pub const REMEDIATION_PROGRAM: &str = "ansible-playbook";
pub const REMEDIATION_ARGS: &[&str] = &["restart-nginx.yml"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub remediation: RemediationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub addr: String,
}

/// The single command run for every firing alert. Always
/// `ansible-playbook restart-nginx.yml`; neither the environment nor a
/// request can change it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemediationConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            program: REMEDIATION_PROGRAM.to_string(),
            args: REMEDIATION_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load() -> crate::Result<Self> {
        // Load environment variables from .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Only `SERVER_ADDR` is read.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            server: ServerConfig {
                addr: lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            },
            remediation: RemediationConfig::default(),
        };

        if config.server.addr.trim().is_empty() {
            return Err(crate::Error::Config(
                "SERVER_ADDR must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                addr: DEFAULT_SERVER_ADDR.to_string(),
            },
            remediation: RemediationConfig::default(),
        }
    }
}
