//! Application settings configuration
//!
//! Defines the ping target, TCP timeouts and the services to probe.

use crate::checks::SkipPolicy;
use crate::utils::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ci-smoke.toml";

/// Ping settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PingSettings {
    pub enabled: bool,
    pub program: String,
    pub host: String,
    pub timeout_secs: u64,
}

impl Default for PingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "ping".to_string(),
            host: "localhost".to_string(),
            timeout_secs: 5,
        }
    }
}

impl PingSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the ping program, host and timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.program.trim().is_empty() {
            return Err(invalid("ping.program", "must not be empty"));
        }
        if self.host.trim().is_empty() {
            return Err(invalid("ping.host", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("ping.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }
}

/// TCP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpSettings {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    2
}

fn default_host() -> String {
    "localhost".to_string()
}

impl Default for TcpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl TcpSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// A service expected to accept TCP connections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTarget {
    pub name: String,
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    /// Overrides `tcp.connect_timeout_secs` for this service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ServiceTarget {
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            timeout_secs: None,
        }
    }

    /// Connect timeout for this service, falling back to the shared one
    pub fn timeout(&self, tcp: &TcpSettings) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| tcp.connect_timeout())
    }
}

fn default_services() -> Vec<ServiceTarget> {
    vec![
        ServiceTarget::new("jenkins", "localhost", 8080),
        ServiceTarget::new("nexus", "localhost", 8081),
    ]
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ping: PingSettings,
    #[serde(default)]
    pub tcp: TcpSettings,
    #[serde(default = "default_services")]
    pub services: Vec<ServiceTarget>,
    #[serde(default)]
    pub skip_policy: SkipPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ping: PingSettings::default(),
            tcp: TcpSettings::default(),
            services: default_services(),
            skip_policy: SkipPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new(DEFAULT_CONFIG_FILE);
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values no probe could run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ping.enabled {
            self.ping.validate()?;
        }

        if self.tcp.connect_timeout_secs == 0 {
            return Err(invalid("tcp.connect_timeout_secs", "must be greater than zero"));
        }

        let mut seen = HashSet::new();
        for (i, service) in self.services.iter().enumerate() {
            let key = |field: &str| format!("services[{}].{}", i, field);
            if service.name.trim().is_empty() {
                return Err(invalid(&key("name"), "must not be empty"));
            }
            if service.host.trim().is_empty() {
                return Err(invalid(&key("host"), "must not be empty"));
            }
            if service.port == 0 {
                return Err(invalid(&key("port"), "must be non-zero"));
            }
            if service.timeout_secs == Some(0) {
                return Err(invalid(&key("timeout_secs"), "must be greater than zero"));
            }
            if !seen.insert(service.name.as_str()) {
                return Err(invalid(
                    &key("name"),
                    &format!("duplicate service name '{}'", service.name),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}
