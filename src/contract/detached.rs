//! Contract binding that serves nobody.
//!
//! Used for local runs without a host (`--detached`) and on targets without
//! Unix domain sockets.

use crate::config::PluginConfig;
use crate::contract::{ContractError, PluginContract};

/// Accepts any configuration and runs without a host link.
#[derive(Debug, Default)]
pub struct DetachedContract {
    config: Option<PluginConfig>,
}

impl DetachedContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration received by the last `start`, if still running.
    pub fn config(&self) -> Option<&PluginConfig> {
        self.config.as_ref()
    }
}

impl PluginContract for DetachedContract {
    fn start(&mut self, config: PluginConfig) -> Result<(), ContractError> {
        tracing::warn!(
            chain_id = config.chain_id,
            "Running detached; no host will invoke this plugin"
        );
        self.config = Some(config);
        Ok(())
    }

    fn close(&mut self) {
        self.config = None;
    }
}
