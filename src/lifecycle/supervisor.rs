//! Plugin lifecycle supervisor.
//!
//! # States
//! ```text
//! Initializing → Running: contract start returned Ok
//! Initializing → Terminated: contract start failed (fatal)
//! Running → ShuttingDown: interrupt or terminate observed
//! ShuttingDown → Terminated: subscription released, contract closed
//! ```

use std::io;

use thiserror::Error;
use tokio::sync::watch;

use crate::config::PluginConfig;
use crate::contract::{ContractError, PluginContract};
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::{ShutdownSignal, SignalListener};
use crate::lifecycle::startup;

/// Where the supervisor is in the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Initializing,
    Running,
    ShuttingDown,
    Terminated,
}

/// Publishes state changes and settles on `Terminated` when dropped, so
/// observers see the terminal state on error returns and cancellation too.
struct StateGuard(watch::Sender<LifecycleState>);

impl StateGuard {
    fn set(&self, next: LifecycleState) {
        self.0.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

impl Drop for StateGuard {
    fn drop(&mut self) {
        self.set(LifecycleState::Terminated);
    }
}

/// Fatal supervisor errors. Every one ends the process.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("shutdown coordinator already handed out its lifetime token")]
    AlreadyArmed,

    #[error("failed to subscribe to shutdown signals: {0}")]
    Signals(#[source] io::Error),

    #[error("plugin failed to start: {0}")]
    Start(#[from] ContractError),
}

/// Owns the process from startup to shutdown.
pub struct Supervisor<C> {
    contract: C,
    config: PluginConfig,
    shutdown: Shutdown,
    os_signals: bool,
    state: watch::Sender<LifecycleState>,
}

impl<C: PluginContract> Supervisor<C> {
    /// Create a supervisor that starts `contract` with `config`.
    ///
    /// Shutdown is requested through `shutdown`; call
    /// [`with_os_signals`](Self::with_os_signals) to also listen for
    /// SIGINT/SIGTERM.
    pub fn new(contract: C, config: PluginConfig, shutdown: Shutdown) -> Self {
        let (state, _) = watch::channel(LifecycleState::Initializing);
        Self {
            contract,
            config,
            shutdown,
            os_signals: false,
            state,
        }
    }

    /// Subscribe the lifetime token to the process's OS signals.
    pub fn with_os_signals(mut self) -> Self {
        self.os_signals = true;
        self
    }

    /// Observe state transitions.
    pub fn state(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Run the plugin until a shutdown signal arrives.
    ///
    /// Returns the signal that ended the run, or the fatal error that
    /// prevented the plugin from starting.
    pub async fn run(self) -> Result<ShutdownSignal, SupervisorError> {
        let Self {
            mut contract,
            config,
            shutdown,
            os_signals,
            state,
        } = self;
        let state = StateGuard(state);

        startup::announce();

        // Armed before start so a signal racing the contract is not lost.
        let mut token = shutdown.arm().ok_or(SupervisorError::AlreadyArmed)?;
        if os_signals {
            let listener = SignalListener::install().map_err(SupervisorError::Signals)?;
            token.listen(listener);
        }

        tracing::info!(
            chain_id = config.chain_id,
            data_dir = %config.data_dir_path.display(),
            options = config.options.len(),
            "Starting plugin"
        );

        if let Err(e) = contract.start(config) {
            tracing::error!(error = %e, "Plugin failed to start");
            state.set(LifecycleState::Terminated);
            return Err(e.into());
        }
        state.set(LifecycleState::Running);
        tracing::info!("Plugin started - waiting for FSM requests...");

        let signal = token.wait().await;
        state.set(LifecycleState::ShuttingDown);
        tracing::info!(signal = %signal, "Received shutdown signal");

        drop(token);
        contract.close();
        state.set(LifecycleState::Terminated);
        tracing::info!("Plugin shut down gracefully");

        Ok(signal)
    }
}
