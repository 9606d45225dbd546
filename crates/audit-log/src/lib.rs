//! Append-only structured JSON-lines audit trail for the promptwall
//! project.
//!
//! Every inspection, rule load, and lifecycle event is serialised as a
//! single newline-terminated JSON object and appended to a log file,
//! producing a [JSON Lines](https://jsonlines.org/) stream that is easy to
//! ship, parse, and replay.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use audit_log::{AuditEntry, AuditEventType, AuditSink};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (sink, handle) = AuditSink::start("/var/log/promptwall/audit.jsonl").await?;
//!
//! sink.log(AuditEntry::new(
//!     AuditEventType::ServiceStarted,
//!     "promptwall",
//!     serde_json::json!({"version": "0.1.0"}),
//! ));
//!
//! // Dropping the last sink clone closes the channel; awaiting the handle
//! // guarantees the final flush.
//! drop(sink);
//! handle.await?;
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod sink;
pub mod writer;

// Re-export primary public types at the crate root for convenience.
pub use entry::{AuditEntry, AuditEventType, InspectionRecord};
pub use sink::AuditSink;
pub use writer::{AuditWriteError, AuditWriter};
