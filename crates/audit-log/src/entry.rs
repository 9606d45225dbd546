use serde::{Deserialize, Serialize};

/// A single audit log entry describing one event in the firewall's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: uuid::Uuid,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub event_type: AuditEventType,
    pub source: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<InspectionRecord>,
}

impl AuditEntry {
    /// Create a new `AuditEntry` with an auto-generated UUID v4 and the
    /// current UTC timestamp. The caller supplies the event type, the name of
    /// the emitting component, and a free-form details JSON value. `outcome`
    /// defaults to `None`.
    pub fn new(
        event_type: AuditEventType,
        source: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            timestamp: chrono::Utc::now(),
            event_type,
            source: source.into(),
            details,
            outcome: None,
        }
    }

    /// Attach an inspection outcome to this entry, consuming and returning
    /// `self` for builder-style usage.
    pub fn with_outcome(mut self, outcome: InspectionRecord) -> Self {
        self.outcome = Some(outcome);
        self
    }
}

/// The category of audit event being recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    InspectionCompleted,
    RequestBlocked,
    TextRedacted,
    RulesLoaded,
    ServiceStarted,
    ServiceStopped,
}

/// Compact record of one inspection's outcome, embedded in audit entries.
///
/// The decision is carried as its lowercase wire string so the audit trail
/// stays readable without this crate knowing the decision enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub request_id: uuid::Uuid,
    pub decision: String,
    pub risk_count: usize,
    pub explanation: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_event_type_as_snake_case() {
        let entry = AuditEntry::new(
            AuditEventType::RequestBlocked,
            "promptwall",
            serde_json::json!({"reason": "high severity"}),
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event_type"], "request_blocked");
        assert_eq!(json["source"], "promptwall");
        assert_eq!(json["details"]["reason"], "high severity");
    }

    #[test]
    fn outcome_is_omitted_when_absent() {
        let entry = AuditEntry::new(
            AuditEventType::ServiceStarted,
            "promptwall",
            serde_json::json!({}),
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("outcome").is_none());
    }

    #[test]
    fn with_outcome_embeds_the_inspection_record() {
        let entry = AuditEntry::new(
            AuditEventType::InspectionCompleted,
            "promptwall",
            serde_json::json!({}),
        )
        .with_outcome(InspectionRecord {
            request_id: uuid::Uuid::new_v4(),
            decision: "redact".to_string(),
            risk_count: 2,
            explanation: "Sensitive data detected: email (PII)".to_string(),
        });

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["outcome"]["decision"], "redact");
        assert_eq!(json["outcome"]["risk_count"], 2);
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = AuditEntry::new(
            AuditEventType::RulesLoaded,
            "promptwall",
            serde_json::json!({"rule_count": 3}),
        );

        let line = serde_json::to_string(&entry).unwrap();
        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back.id, entry.id);
        assert_eq!(back.event_type, AuditEventType::RulesLoaded);
    }
}
