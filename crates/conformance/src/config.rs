//! Platform configuration loader
//!
//! The harness needs exactly one platform fact before any suite runs: how
//! many CPU-facing Ethernet ports the device has (`MaxEthPort`). It is read
//! once from `./platform_config` and handed to every test through
//! [`TestContext`](crate::TestContext).
//!
//! # File format
//!
//! ```json
//! { "MaxEthPort": 4 }
//! ```
//!
//! A missing, empty or malformed file is an error returned to the caller.
//! A well-formed document without a usable `MaxEthPort` (absent, negative,
//! fractional, not a number, above [`MAX_ETH_PORT_LIMIT`]) keeps the default
//! of `0` and logs a warning.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./platform_config";

/// JSON key holding the Ethernet port count.
pub const MAX_ETH_PORT_KEY: &str = "MaxEthPort";

/// Largest port count accepted from the file. Port-indexed tests iterate
/// every port, so larger values are treated as unusable.
pub const MAX_ETH_PORT_LIMIT: u32 = 64;

/// Immutable platform facts shared by every test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformConfig {
    /// Number of CPU-facing Ethernet ports; valid port indices are `0..max_eth_port`.
    pub max_eth_port: u32,
}

impl PlatformConfig {
    /// Configuration with an explicit port count.
    pub const fn with_max_eth_port(max_eth_port: u32) -> Self {
        Self { max_eth_port }
    }

    /// Parse a configuration document held in memory.
    ///
    /// `path` is only used to label errors.
    pub fn from_json_str(json: &str, path: &Path) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: path.to_path_buf(),
            });
        }

        let document: serde_json::Value =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // Derived structs also accept JSON arrays; only an object can carry the key.
        let raw = if document.is_object() {
            RawConfig::deserialize(&document).unwrap_or_default()
        } else {
            RawConfig::default()
        };
        let ports = raw
            .max_eth_port
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .and_then(|ports| u32::try_from(ports).ok())
            .filter(|ports| *ports <= MAX_ETH_PORT_LIMIT);
        let max_eth_port = match ports {
            Some(ports) => ports,
            None => {
                tracing::warn!(
                    path = %path.display(),
                    key = MAX_ETH_PORT_KEY,
                    limit = MAX_ETH_PORT_LIMIT,
                    "no usable port count in configuration, using default"
                );
                Self::default().max_eth_port
            }
        };

        Ok(Self { max_eth_port })
    }

    /// Ethernet port indices `0..max_eth_port`.
    pub fn eth_ports(&self) -> core::ops::Range<u32> {
        0..self.max_eth_port
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(rename = "MaxEthPort", default)]
    max_eth_port: Option<serde_json::Value>,
}

/// Read and parse the configuration file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<PlatformConfig, ConfigError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = PlatformConfig::from_json_str(&json, path)?;
    tracing::info!(
        path = %path.display(),
        max_eth_port = config.max_eth_port,
        "platform configuration loaded"
    );
    Ok(config)
}

/// Read and parse [`DEFAULT_CONFIG_PATH`].
pub fn load_default() -> Result<PlatformConfig, ConfigError> {
    load(DEFAULT_CONFIG_PATH)
}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// The file exists but holds nothing.
    Empty {
        /// File that was read
        path: PathBuf,
    },
    /// The file is not valid JSON.
    Parse {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            Self::Empty { path } => write!(f, "{} is empty", path.display()),
            Self::Parse { path, source } => {
                write!(f, "{} is not valid JSON: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<PlatformConfig, ConfigError> {
        PlatformConfig::from_json_str(json, Path::new("platform_config"))
    }

    #[test]
    fn test_reads_max_eth_port() {
        assert_eq!(parse(r#"{"MaxEthPort": 4}"#).unwrap().max_eth_port, 4);
        assert_eq!(parse(r#"{"MaxEthPort": 0, "Other": true}"#).unwrap().max_eth_port, 0);
        assert_eq!(parse(r#"{"MaxEthPort": 64}"#).unwrap().max_eth_port, MAX_ETH_PORT_LIMIT);
    }

    #[test]
    fn test_unusable_field_keeps_default() {
        for json in [
            r"{}",
            r#"{"MaxEthPort": "4"}"#,
            r#"{"MaxEthPort": -1}"#,
            r#"{"MaxEthPort": 2.5}"#,
            r#"{"MaxEthPort": null}"#,
            r"[4]",
            r"4",
            r#"{"MaxEthPort": 65}"#,
            r#"{"MaxEthPort": 4294967295}"#,
            r#"{"MaxEthPort": 99999999999}"#,
        ] {
            assert_eq!(parse(json).unwrap(), PlatformConfig::default(), "{json}");
        }
    }

    #[test]
    fn test_empty_and_malformed_are_errors() {
        assert!(matches!(parse(""), Err(ConfigError::Empty { .. })));
        assert!(matches!(parse(" \n\t"), Err(ConfigError::Empty { .. })));
        assert!(matches!(parse(r#"{"MaxEthPort": "#), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_eth_ports_range() {
        let ports: Vec<u32> = PlatformConfig::with_max_eth_port(3).eth_ports().collect();
        assert_eq!(ports, vec![0, 1, 2]);
        assert_eq!(PlatformConfig::default().eth_ports().count(), 0);
    }
}
