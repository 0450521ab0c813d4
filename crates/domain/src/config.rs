use serde::{Deserialize, Serialize};

use crate::name::MAX_WIRE_LEN;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

/// Bounds the decoder enforces on every message it is handed.
///
/// The 255-byte name limit and the backward-pointer rule are wire-format
/// invariants and are not configurable; these limits bound the work a
/// single hostile buffer can cause beyond that.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DecodeLimits {
    /// Largest accepted message, in bytes.
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,

    /// Compression pointer hops followed before a name is rejected.
    #[serde(default = "default_max_pointer_hops")]
    pub max_pointer_hops: usize,

    /// Largest accepted per-section entry count.
    #[serde(default = "default_max_section_count")]
    pub max_section_count: u16,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_message_len: default_max_message_len(),
            max_pointer_hops: default_max_pointer_hops(),
            max_section_count: default_max_section_count(),
        }
    }
}

impl DecodeLimits {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_message_len < 12 {
            return Err(ConfigError::Validation(format!(
                "max_message_len {} cannot hold a DNS header",
                self.max_message_len
            )));
        }
        if self.max_message_len > u16::MAX as usize {
            return Err(ConfigError::Validation(format!(
                "max_message_len {} exceeds the {} limit of a DNS message",
                self.max_message_len,
                u16::MAX
            )));
        }
        if self.max_pointer_hops == 0 || self.max_pointer_hops > MAX_WIRE_LEN / 2 + 1 {
            return Err(ConfigError::Validation(format!(
                "max_pointer_hops {} outside 1..={}",
                self.max_pointer_hops,
                MAX_WIRE_LEN / 2 + 1
            )));
        }
        if self.max_section_count == 0 {
            return Err(ConfigError::Validation(
                "max_section_count cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_max_message_len() -> usize {
    u16::MAX as usize
}

// A 255-byte name holds at most 127 labels, so a pointer chain longer
// than that cannot come from a well-formed message.
fn default_max_pointer_hops() -> usize {
    128
}

fn default_max_section_count() -> u16 {
    256
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub max_pointer_hops: Option<usize>,
}

/// Main configuration structure for Spyglass DNS.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Decoder limits.
    #[serde(default)]
    pub limits: DecodeLimits,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. spyglass-dns.toml in current directory
    /// 3. /etc/spyglass-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("spyglass-dns.toml").exists() {
            Self::from_file("spyglass-dns.toml")?
        } else if std::path::Path::new("/etc/spyglass-dns/config.toml").exists() {
            Self::from_file("/etc/spyglass-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.limits.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(hops) = overrides.max_pointer_hops {
            self.limits.max_pointer_hops = hops;
        }
    }
}
