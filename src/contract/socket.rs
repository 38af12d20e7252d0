//! Host link over the Unix domain socket in the plugin data directory.
//!
//! # Responsibilities
//! - Create the data directory if missing
//! - Connect to `<data_dir>/plugin.sock`, where the host listens
//! - Keep the session open on a background task until closed
//!
//! Framing and message handling belong to the contract library; this
//! binding only holds the connection.

use std::os::unix::net::UnixStream as StdUnixStream;

use tokio::io::AsyncReadExt;
use tokio::net::UnixStream;
use tokio::task::JoinHandle;

use crate::config::PluginConfig;
use crate::contract::{ContractError, PluginContract};

const READ_BUFFER_SIZE: usize = 4096;

/// Connects to the host socket and keeps the session alive.
#[derive(Debug, Default)]
pub struct UnixSocketContract {
    session: Option<JoinHandle<()>>,
}

impl UnixSocketContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the background session task is still running.
    pub fn is_connected(&self) -> bool {
        self.session.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl PluginContract for UnixSocketContract {
    /// Must be called inside a Tokio runtime.
    fn start(&mut self, config: PluginConfig) -> Result<(), ContractError> {
        std::fs::create_dir_all(&config.data_dir_path).map_err(|source| ContractError::DataDir {
            path: config.data_dir_path.clone(),
            source,
        })?;

        let path = config.socket_path();
        let host_unreachable = |source| ContractError::HostUnreachable {
            path: path.clone(),
            source,
        };

        // Blocking connect on the caller's worker: the socket is local, so it
        // completes or fails without waiting on the network.
        let stream = StdUnixStream::connect(&path).map_err(host_unreachable)?;
        stream.set_nonblocking(true).map_err(host_unreachable)?;
        let stream = UnixStream::from_std(stream).map_err(host_unreachable)?;

        tracing::info!(
            socket = %path.display(),
            chain_id = config.chain_id,
            "Connected to host"
        );

        self.session = Some(tokio::spawn(hold_session(stream)));
        Ok(())
    }

    fn close(&mut self) {
        if let Some(session) = self.session.take() {
            session.abort();
            tracing::debug!("Host session closed");
        }
    }
}

impl Drop for UnixSocketContract {
    fn drop(&mut self) {
        self.close();
    }
}

async fn hold_session(mut stream: UnixStream) {
    let mut buf = [0u8; READ_BUFFER_SIZE];
    loop {
        match stream.read(&mut buf).await {
            Ok(0) => {
                tracing::warn!("Host closed the plugin socket");
                return;
            }
            Ok(n) => tracing::trace!(bytes = n, "Host traffic received"),
            Err(e) => {
                tracing::warn!(error = %e, "Host socket read failed");
                return;
            }
        }
    }
}
