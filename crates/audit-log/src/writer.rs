use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::entry::AuditEntry;

/// Errors that can occur during audit trail I/O.
#[derive(Debug, thiserror::Error)]
pub enum AuditWriteError {
    #[error("failed to create parent directories: {0}")]
    CreateDir(std::io::Error),

    #[error("failed to open audit trail file: {0}")]
    OpenFile(std::io::Error),

    #[error("failed to serialize audit entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write to audit trail: {0}")]
    Write(std::io::Error),

    #[error("failed to flush audit trail: {0}")]
    Flush(std::io::Error),
}

/// Append-only file writer that serialises [`AuditEntry`] values as
/// JSON-lines.
///
/// Each call to [`append`](Self::append) produces exactly one
/// newline-terminated JSON object in the output file, so a crashed process
/// leaves at most one truncated line at the tail.
pub struct AuditWriter {
    file: tokio::fs::File,
    entries_written: u64,
}

impl AuditWriter {
    /// Open (or create) the audit trail file at `path` in append mode.
    ///
    /// Parent directories are created automatically if they do not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AuditWriteError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AuditWriteError::CreateDir)?;
        }

        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(AuditWriteError::OpenFile)?;

        Ok(Self {
            file,
            entries_written: 0,
        })
    }

    /// Serialise `entry` as a single JSON line and append it to the file.
    pub async fn append(&mut self, entry: &AuditEntry) -> Result<(), AuditWriteError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        self.file
            .write_all(&line)
            .await
            .map_err(AuditWriteError::Write)?;

        self.entries_written += 1;
        Ok(())
    }

    /// Flush the underlying file, ensuring all buffered data reaches disk.
    pub async fn flush(&mut self) -> Result<(), AuditWriteError> {
        self.file.flush().await.map_err(AuditWriteError::Flush)
    }

    /// Number of entries successfully appended since this writer was opened.
    pub fn entries_written(&self) -> u64 {
        self.entries_written
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::AuditEventType;

    fn entry(event_type: AuditEventType) -> AuditEntry {
        AuditEntry::new(event_type, "test", serde_json::json!({}))
    }

    #[tokio::test]
    async fn append_writes_one_json_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        let mut writer = AuditWriter::open(&path).await.unwrap();
        writer.append(&entry(AuditEventType::ServiceStarted)).await.unwrap();
        writer
            .append(&entry(AuditEventType::InspectionCompleted))
            .await
            .unwrap();
        writer.flush().await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: AuditEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.event_type, AuditEventType::ServiceStarted);
        assert_eq!(writer.entries_written(), 2);
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/audit.jsonl");

        let mut writer = AuditWriter::open(&path).await.unwrap();
        writer.append(&entry(AuditEventType::ServiceStopped)).await.unwrap();
        writer.flush().await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn reopening_appends_rather_than_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        {
            let mut writer = AuditWriter::open(&path).await.unwrap();
            writer.append(&entry(AuditEventType::ServiceStarted)).await.unwrap();
            writer.flush().await.unwrap();
        }
        {
            let mut writer = AuditWriter::open(&path).await.unwrap();
            writer.append(&entry(AuditEventType::ServiceStopped)).await.unwrap();
            writer.flush().await.unwrap();
        }

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
