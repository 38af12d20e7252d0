//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! lifecycle / contract / config
//!     → tracing events with structured fields
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stderr
//! ```

pub mod logging;
