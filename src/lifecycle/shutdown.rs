//! Shutdown coordination for the plugin process.
//!
//! A [`Shutdown`] coordinator hands out a single [`ProcessLifetimeToken`].
//! Notifications delivered through [`Shutdown::trigger`] (by the OS signal
//! listener, or directly in tests) resolve the token's wait. Only the first
//! notification delivered while the token is armed counts.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::lifecycle::signals::{ShutdownSignal, SignalListener};

const IDLE: u8 = 0;
const ARMED: u8 = 1;
const RELEASED: u8 = 2;

struct Shared {
    tx: watch::Sender<Option<ShutdownSignal>>,
    phase: AtomicU8,
    releases: AtomicUsize,
}

impl Shared {
    fn trigger(&self, signal: ShutdownSignal) -> bool {
        if self.phase.load(Ordering::SeqCst) != ARMED {
            tracing::debug!(signal = %signal, "Shutdown notification ignored; no armed wait");
            return false;
        }

        let accepted = self.tx.send_if_modified(|current| {
            if current.is_none() {
                *current = Some(signal);
                true
            } else {
                false
            }
        });

        if !accepted {
            tracing::debug!(signal = %signal, "Shutdown already requested; notification ignored");
        }
        accepted
    }
}

/// Coordinator for graceful shutdown.
///
/// Cloning yields another handle to the same coordinator.
#[derive(Clone)]
pub struct Shutdown {
    shared: Arc<Shared>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            shared: Arc::new(Shared {
                tx,
                phase: AtomicU8::new(IDLE),
                releases: AtomicUsize::new(0),
            }),
        }
    }

    /// Arm the coordinator's one and only lifetime token.
    ///
    /// Returns `None` if a token was already handed out, even if it has
    /// since been released.
    pub fn arm(&self) -> Option<ProcessLifetimeToken> {
        self.shared
            .phase
            .compare_exchange(IDLE, ARMED, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;

        tracing::debug!("Process lifetime token armed");
        Some(ProcessLifetimeToken {
            rx: self.shared.tx.subscribe(),
            shared: Arc::clone(&self.shared),
            listener: None,
        })
    }

    /// Deliver a shutdown notification.
    ///
    /// Returns `true` if this notification resolved the armed wait.
    pub fn trigger(&self, signal: ShutdownSignal) -> bool {
        self.shared.trigger(signal)
    }

    /// Whether a token is currently armed and not yet released.
    pub fn is_armed(&self) -> bool {
        self.shared.phase.load(Ordering::SeqCst) == ARMED
    }

    /// Number of times a token has been released (0 or 1).
    pub fn releases(&self) -> usize {
        self.shared.releases.load(Ordering::SeqCst)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellable wait tied to the process's signal subscription.
///
/// Dropping the token releases the subscription, on every exit path.
pub struct ProcessLifetimeToken {
    rx: watch::Receiver<Option<ShutdownSignal>>,
    shared: Arc<Shared>,
    listener: Option<JoinHandle<()>>,
}

impl ProcessLifetimeToken {
    /// Forward the first OS signal seen by `listener` into this token.
    ///
    /// Must be called inside a Tokio runtime. A previously attached listener
    /// is stopped.
    pub fn listen(&mut self, mut listener: SignalListener) {
        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            let signal = listener.recv().await;
            tracing::debug!(signal = %signal, "OS signal observed");
            shared.trigger(signal);
        });

        if let Some(previous) = self.listener.replace(task) {
            previous.abort();
        }
    }

    /// Block until a shutdown notification arrives.
    ///
    /// Never resolves without one.
    pub async fn wait(&mut self) -> ShutdownSignal {
        let observed = match self.rx.wait_for(Option::is_some).await {
            Ok(value) => *value,
            Err(_) => None,
        };

        match observed {
            Some(signal) => signal,
            // The sender lives in `shared`, which this token keeps alive.
            None => std::future::pending().await,
        }
    }
}

impl Drop for ProcessLifetimeToken {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
        self.shared.phase.store(RELEASED, Ordering::SeqCst);
        self.shared.releases.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Signal subscription released");
    }
}
