//! Plugin contract seam.
//!
//! # Responsibilities
//! - Define the capability the supervisor delegates to ([`PluginContract`])
//! - Provide the thinnest bindings that make the binary runnable
//!
//! # Design Decisions
//! - The supervisor depends only on the trait; tests substitute stubs
//! - `start` returns once the plugin serves in the background, or fails

pub mod detached;
#[cfg(unix)]
pub mod socket;

pub use detached::DetachedContract;
#[cfg(unix)]
pub use socket::UnixSocketContract;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::PluginConfig;

/// Error returned when the plugin cannot be started.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("host unreachable at {path}: {source}")]
    HostUnreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("plugin rejected configuration: {0}")]
    Rejected(String),
}

/// The hosting contract a plugin registers itself through.
pub trait PluginContract: Send {
    /// Begin serving the host with `config`.
    ///
    /// Returns once serving continues in the background. An error is a
    /// fatal startup failure.
    fn start(&mut self, config: PluginConfig) -> Result<(), ContractError>;

    /// Stop serving. Called once after the shutdown signal.
    fn close(&mut self) {}
}

impl<C: PluginContract + ?Sized> PluginContract for Box<C> {
    fn start(&mut self, config: PluginConfig) -> Result<(), ContractError> {
        (**self).start(config)
    }

    fn close(&mut self) {
        (**self).close()
    }
}
