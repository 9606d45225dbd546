use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use crate::entry::AuditEntry;
use crate::writer::AuditWriter;

/// Channel buffer size used between producers and the background writer task.
const CHANNEL_BUFFER: usize = 1024;

/// Flush the writer at most every this many seconds when the channel is idle.
const FLUSH_INTERVAL_SECS: u64 = 1;

/// A cheap, cloneable handle used to submit [`AuditEntry`] values into the
/// background audit-trail writer.
///
/// `AuditSink` is `Clone + Send + Sync` so it can be shared freely across
/// tasks. Submission never blocks: when the channel is full the entry is
/// dropped and counted rather than stalling the inspection path.
#[derive(Clone)]
pub struct AuditSink {
    tx: mpsc::Sender<AuditEntry>,
    dropped: Arc<AtomicU64>,
}

impl AuditSink {
    /// Spawn the background writer task and return a `(sink, join_handle)`
    /// pair.
    ///
    /// The writer opens (or creates) the file at `path` in append mode and
    /// begins draining entries from the internal channel. The background
    /// task:
    ///
    /// * writes each entry as a JSON line via [`AuditWriter`],
    /// * flushes after every ~1 second of channel inactivity,
    /// * flushes once more when the last `AuditSink` clone is dropped and
    ///   the channel closes, then exits cleanly.
    ///
    /// Await the returned handle after dropping the sink to guarantee the
    /// final flush has completed.
    pub async fn start(
        path: impl AsRef<Path>,
    ) -> Result<(Self, JoinHandle<()>), crate::writer::AuditWriteError> {
        let (tx, rx) = mpsc::channel::<AuditEntry>(CHANNEL_BUFFER);

        let mut writer = AuditWriter::open(path).await?;

        let handle = tokio::spawn(async move {
            run_writer_loop(&mut writer, rx).await;
        });

        Ok((
            Self {
                tx,
                dropped: Arc::new(AtomicU64::new(0)),
            },
            handle,
        ))
    }

    /// Submit an audit entry to the background writer without blocking.
    ///
    /// If the channel is full, or the background task has already exited,
    /// the entry is dropped: the drop is counted and a warning is logged.
    pub fn log(&self, entry: AuditEntry) {
        match self.tx.try_send(entry) {
            Ok(()) => {}
            Err(TrySendError::Full(entry)) => {
                let total = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::warn!(
                    event_type = ?entry.event_type,
                    dropped_total = total,
                    "audit sink queue full, entry dropped"
                );
            }
            Err(TrySendError::Closed(entry)) => {
                let total = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::warn!(
                    event_type = ?entry.event_type,
                    dropped_total = total,
                    "audit sink channel closed, entry dropped"
                );
            }
        }
    }

    /// Total number of entries dropped because the queue was full or the
    /// writer had already stopped.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Core loop executed inside the background task.
///
/// Reads entries from the channel and appends them to the audit trail. When
/// the channel has had no entries for [`FLUSH_INTERVAL_SECS`] the writer is
/// flushed. On channel close a final flush is performed.
async fn run_writer_loop(writer: &mut AuditWriter, mut rx: mpsc::Receiver<AuditEntry>) {
    let flush_interval = tokio::time::Duration::from_secs(FLUSH_INTERVAL_SECS);
    let mut dirty = false;

    loop {
        // Wait for the next entry, but time out so we can periodically flush.
        let maybe_entry = tokio::time::timeout(flush_interval, rx.recv()).await;

        match maybe_entry {
            // Received an entry before the timeout.
            Ok(Some(entry)) => {
                if let Err(err) = writer.append(&entry).await {
                    tracing::error!(%err, "failed to write audit entry");
                } else {
                    dirty = true;
                }
            }
            // Channel closed: final flush and exit.
            Ok(None) => {
                if dirty {
                    if let Err(err) = writer.flush().await {
                        tracing::error!(%err, "failed to flush audit trail on shutdown");
                    }
                }
                tracing::debug!(
                    entries_written = writer.entries_written(),
                    "audit writer background task shutting down"
                );
                return;
            }
            // Timeout: flush if we have outstanding writes.
            Err(_) => {
                if dirty {
                    if let Err(err) = writer.flush().await {
                        tracing::error!(%err, "periodic audit trail flush failed");
                    } else {
                        dirty = false;
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
