//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `eventsd.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use eventsproject_domain::participant::Organizer;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Periodic cost recomputation.
    pub cost: CostConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Cost scheduler configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Run the scheduler at all.
    pub enabled: bool,
    /// Seconds between two recomputations.
    pub interval_secs: u64,
    /// Whose events get their cost recomputed.
    pub organizer: Organizer,
}

impl Config {
    /// Load configuration from `eventsd.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("eventsd.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("EVENTSD_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("EVENTSD_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("EVENTSD_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("EVENTSD_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("EVENTSD_COST_INTERVAL_SECS") {
            if let Ok(secs) = val.parse() {
                self.cost.interval_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("EVENTSD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.cost.enabled && self.cost.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "cost.interval_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl LoggingConfig {
    /// Parse the filter directive.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the directive is not valid `RUST_LOG`
    /// syntax.
    pub fn env_filter(&self) -> Result<EnvFilter, ParseError> {
        EnvFilter::try_new(&self.filter)
    }
}

impl CostConfig {
    /// Period between two recomputations.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8089,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:events.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "eventsd=info,eventsproject_app=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 60,
            organizer: Organizer::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
