//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive
    pub log_level: String,

    /// Whether to write logs to stdout at all
    pub console_output: bool,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Network identifier (mainnet, testnet, devnet)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "project-handles".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            network: "mainnet".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PH_SERVICE_NAME`: Service name (default: project-handles)
    /// - `PH_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `PH_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `PH_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    /// - `PH_NETWORK`: Network name (default: mainnet)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("PH_SERVICE_NAME")
                .unwrap_or_else(|_| "project-handles".to_string()),

            log_level: env::var("PH_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("PH_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("PH_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),

            network: env::var("PH_NETWORK").unwrap_or_else(|_| "mainnet".to_string()),
        }
    }

    /// Service name qualified by network, e.g. `project-handles-testnet`.
    pub fn full_service_name(&self) -> String {
        if self.network == "mainnet" {
            self.service_name.clone()
        } else {
            format!("{}-{}", self.service_name, self.network)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "project-handles");
        assert_eq!(config.log_level, "info");
        assert!(config.console_output);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_full_service_name() {
        let mut config = TelemetryConfig::default();
        assert_eq!(config.full_service_name(), "project-handles");

        config.network = "testnet".to_string();
        assert_eq!(config.full_service_name(), "project-handles-testnet");
    }
}
