//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Announce product/version → hand config to the plugin contract
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → ShutdownSignal
//!
//! Shutdown (shutdown.rs):
//!     Arm token → signal observed → release subscription
//!
//! Supervisor (supervisor.rs):
//!     Initializing → Running → ShuttingDown → Terminated
//! ```
//!
//! # Design Decisions
//! - Ordered startup: announce first, so a failing start still names its version
//! - Signal subscription is armed before the contract starts; the wait is
//!   entered only after it starts
//! - Start failure is fatal: no retries, the binary exits non-zero

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod supervisor;

pub use shutdown::{ProcessLifetimeToken, Shutdown};
pub use signals::{ShutdownSignal, SignalListener};
pub use supervisor::{LifecycleState, Supervisor, SupervisorError};
