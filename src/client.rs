//! The slow reader
//!
//! Connects to the daemon socket, issues one command and then drains the
//! response one byte at a time with a pause between reads. The throttle is
//! the whole point: it lets an operator watch how the daemon behaves while a
//! consumer takes its output arbitrarily slowly.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::sleep;
use tracing::debug;

use crate::protocol::Command;

/// Client that drains the daemon's output at a throttled rate
pub struct SlowReader {
    stream: UnixStream,
    interval: Duration,
}

/// Outcome of a completed drain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainSummary {
    /// Bytes emitted before the peer closed the connection
    pub bytes: u64,
}

impl SlowReader {
    /// Connect to the daemon socket. A missing, unlistened or unreadable
    /// socket is fatal; the caller should not proceed to the drain loop.
    pub async fn connect(socket_path: &Path, interval: Duration) -> Result<Self, ClientError> {
        let stream = UnixStream::connect(socket_path)
            .await
            .map_err(|e| ClientError::Connect {
                path: socket_path.to_path_buf(),
                source: e,
            })?;

        Ok(Self { stream, interval })
    }

    /// Send a command as a single write. No acknowledgment is awaited.
    pub async fn send_command(&mut self, command: Command) -> Result<(), ClientError> {
        self.stream.write_all(command.wire()).await?;
        Ok(())
    }

    /// Drain the response: read one byte, emit it to `out` immediately, then
    /// sleep for the configured interval and repeat. Each read may block for
    /// as long as the peer sends nothing.
    ///
    /// A zero-length read means the peer closed the connection; the loop ends
    /// cleanly and reports how many bytes were drained.
    pub async fn drain<W>(&mut self, out: &mut W) -> Result<DrainSummary, ClientError>
    where
        W: AsyncWrite + Unpin,
    {
        let mut buf = [0u8; 1];
        let mut bytes: u64 = 0;

        loop {
            let n = self.stream.read(&mut buf).await?;
            if n == 0 {
                debug!("peer closed the connection after {} bytes", bytes);
                break;
            }

            out.write_all(&buf[..n]).await?;
            out.flush().await?;
            bytes += 1;

            sleep(self.interval).await;
        }

        Ok(DrainSummary { bytes })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to connect to {path:?}: {source}")]
    Connect {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("socket I/O error: {0}")]
    Io(#[from] std::io::Error),
}
