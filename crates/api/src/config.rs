use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    /// Mock data source and gateway tuning.
    #[serde(default)]
    pub mock: MockConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Settings for the simulated data source and notification gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// Whether catalog reads pause for the simulated network delays.
    #[serde(default = "default_latency_enabled")]
    pub latency_enabled: bool,

    /// Probability that the mock gateway delivers a test send, in [0, 1].
    #[serde(default = "default_gateway_success_rate")]
    pub gateway_success_rate: f64,

    /// Simulated gateway round-trip in milliseconds.
    #[serde(default = "default_gateway_delay_ms")]
    pub gateway_delay_ms: u64,

    /// Best-effort cap on a gateway call before surfacing a failure.
    #[serde(default = "default_gateway_timeout_ms")]
    pub gateway_timeout_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_enabled: default_latency_enabled(),
            gateway_success_rate: default_gateway_success_rate(),
            gateway_delay_ms: default_gateway_delay_ms(),
            gateway_timeout_ms: default_gateway_timeout_ms(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_latency_enabled() -> bool {
    true
}
fn default_gateway_success_rate() -> f64 {
    0.8
}
fn default_gateway_delay_ms() -> u64 {
    1500
}
fn default_gateway_timeout_ms() -> u64 {
    5000
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with PP__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("PP").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds the config entirely from embedded defaults and overrides,
    /// without touching the filesystem.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            request_timeout_secs = 30

            [logging]
            level = "debug"
            format = "pretty"

            [security]
            cors_origins = []

            [mock]
            latency_enabled = false
            gateway_success_rate = 1.0
            gateway_delay_ms = 0
            gateway_timeout_ms = 5000
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mock.gateway_success_rate) {
            return Err(ConfigValidationError::InvalidValue(
                "mock.gateway_success_rate must be between 0 and 1".to_string(),
            ));
        }

        if self.mock.gateway_timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "mock.gateway_timeout_ms cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .expect("Invalid socket address")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_with_defaults() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.mock.latency_enabled);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_override() {
        let config = Config::load_for_test(&[
            ("server.port", "9000"),
            ("logging.level", "trace"),
            ("mock.gateway_success_rate", "0.5"),
        ])
        .expect("Failed to load config");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "trace");
        assert!((config.mock.gateway_success_rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_validation_rejects_port_zero() {
        let config = Config::load_for_test(&[("server.port", "0")]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_success_rate() {
        let config = Config::load_for_test(&[("mock.gateway_success_rate", "1.5")]).unwrap();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("gateway_success_rate"));
    }

    #[test]
    fn test_config_validation_rejects_zero_gateway_timeout() {
        let config = Config::load_for_test(&[("mock.gateway_timeout_ms", "0")]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::load_for_test(&[("server.port", "3000")]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_mock_config_defaults() {
        let mock = MockConfig::default();
        assert!(mock.latency_enabled);
        assert!((mock.gateway_success_rate - 0.8).abs() < f64::EPSILON);
        assert_eq!(mock.gateway_delay_ms, 1500);
        assert_eq!(mock.gateway_timeout_ms, 5000);
    }
}
