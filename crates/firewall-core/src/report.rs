//! The inspection record returned to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use policy_engine::Decision;
use risk_scanner::RiskMatch;

/// Outcome of one firewall inspection.
///
/// Immutable after construction.  The caller owns serialization and
/// persistence; this type only fixes the field set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionResult {
    /// The action the caller must enforce.
    pub decision: Decision,
    /// Prompt text after enforcement; `None` when no prompt was supplied.
    /// Carries the input unchanged for Warn/Allow decisions.
    pub prompt_modified: Option<String>,
    /// Response text after enforcement; `None` when no response was
    /// supplied.
    pub response_modified: Option<String>,
    /// Every detected risk: prompt risks first, then response risks, each
    /// in detection order.  The decision is derived from exactly this set.
    pub risks: Vec<RiskMatch>,
    /// Human-readable summary of the decision.
    pub explanation: String,
    /// Unique identifier for this inspection.
    pub request_id: Uuid,
    /// When the inspection ran (UTC).
    pub timestamp: DateTime<Utc>,
}

impl InspectionResult {
    /// Convenience helper: `true` when at least one risk was detected.
    pub fn has_risks(&self) -> bool {
        !self.risks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_json_with_expected_fields() {
        let result = InspectionResult {
            decision: Decision::Allow,
            prompt_modified: Some("hello".to_string()),
            response_modified: None,
            risks: Vec::new(),
            explanation: "No security risks detected. Request allowed.".to_string(),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["decision"], "allow");
        assert_eq!(json["prompt_modified"], "hello");
        assert!(json["response_modified"].is_null());
        assert!(json.get("request_id").is_some());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn has_risks_reflects_risk_list() {
        let mut result = InspectionResult {
            decision: Decision::Allow,
            prompt_modified: None,
            response_modified: None,
            risks: Vec::new(),
            explanation: String::new(),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        };
        assert!(!result.has_risks());

        result.risks.push(risk_scanner::RiskMatch {
            risk_type: risk_scanner::RiskType::Pii,
            pattern_name: "email".to_string(),
            matched_text: "a@b.com".to_string(),
            span: risk_scanner::Span { start: 0, end: 7 },
            severity: risk_scanner::Severity::Medium,
            explanation: "Email address detected".to_string(),
        });
        assert!(result.has_risks());
    }
}
