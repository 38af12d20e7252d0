//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// File name of the host rendezvous socket inside the data directory.
pub const SOCKET_FILE_NAME: &str = "plugin.sock";

/// Root configuration for the plugin process.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Startup parameters handed to the plugin contract.
    pub plugin: PluginConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Startup parameters for the plugin contract.
///
/// The supervisor never looks inside this value; it is built once and moved
/// into [`PluginContract::start`](crate::contract::PluginContract::start).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PluginConfig {
    /// Chain the host is running (1 = default local chain).
    pub chain_id: u64,

    /// Directory shared with the host; holds the rendezvous socket.
    pub data_dir_path: PathBuf,

    /// Extra keys forwarded to the contract uninterpreted.
    pub options: BTreeMap<String, String>,
}

impl PluginConfig {
    /// Path of the socket the host listens on.
    pub fn socket_path(&self) -> PathBuf {
        self.data_dir_path.join(SOCKET_FILE_NAME)
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            chain_id: 1,
            data_dir_path: PathBuf::from("/tmp/plugin/"),
            options: BTreeMap::new(),
        }
    }
}

/// The configuration a plugin starts with when none is supplied.
pub fn default_config() -> PluginConfig {
    PluginConfig::default()
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
