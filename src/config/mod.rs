//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! PluginConfig::default()          (no --config flag)
//!     or
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → PluginConfig moved into the contract's start call
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{default_config, AppConfig, ObservabilityConfig, PluginConfig};
