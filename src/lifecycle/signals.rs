//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for SIGINT and SIGTERM
//! - Translate the first one observed into a [`ShutdownSignal`]
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Only Ctrl+C is observable on non-Unix targets
//! - SIGKILL cannot be observed and bypasses graceful shutdown

use std::fmt;
use std::io;

/// A termination request from the operating environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl+C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Subscription to the process's interrupt and terminate signals.
///
/// Dropping the listener stops delivery to it.
pub struct SignalListener {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl SignalListener {
    /// Register the signal handlers. Must be called inside a Tokio runtime.
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let interrupt = signal(SignalKind::interrupt())?;
        let terminate = signal(SignalKind::terminate())?;
        tracing::debug!("Signal handlers installed for SIGINT and SIGTERM");

        Ok(Self {
            interrupt,
            terminate,
        })
    }

    /// Register the signal handlers. Must be called inside a Tokio runtime.
    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        tracing::debug!("Signal handler installed for Ctrl+C");
        Ok(Self {})
    }

    /// Wait for the next interrupt or terminate signal.
    ///
    /// Stays pending forever if the OS streams close without a signal.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> ShutdownSignal {
        tokio::select! {
            Some(()) = self.interrupt.recv() => ShutdownSignal::Interrupt,
            Some(()) = self.terminate.recv() => ShutdownSignal::Terminate,
            else => std::future::pending().await,
        }
    }

    /// Wait for the next interrupt signal.
    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> ShutdownSignal {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ShutdownSignal::Interrupt,
            Err(e) => {
                tracing::warn!(error = %e, "Ctrl+C handler failed; waiting indefinitely");
                std::future::pending().await
            }
        }
    }
}
