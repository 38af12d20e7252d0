//! Canopy plugin process.
//!
//! Joins a host through the plugin contract and stays up until SIGINT or
//! SIGTERM.

pub mod config;
pub mod contract;
pub mod lifecycle;
pub mod observability;

pub use config::{default_config, AppConfig, PluginConfig};
pub use contract::PluginContract;
pub use lifecycle::{LifecycleState, Shutdown, ShutdownSignal, Supervisor};
