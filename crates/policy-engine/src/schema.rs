use serde::{Deserialize, Serialize};

use risk_scanner::{RiskType, Severity};

use crate::decision::Decision;

/// Top-level custom rule set loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Schema version; currently must be "1.0".
    pub version: String,
    /// Ordered list of rules.  List order breaks severity ties during
    /// evaluation, so it is meaningful.
    pub rules: Vec<PolicyRule>,
}

/// An externally supplied rule overriding the default severity policy.
///
/// A plain value object: the risk type scopes which risks the rule can
/// match, the pattern (regex or keyword) is tested against a risk's matched
/// text, and the action is what the firewall should do when the rule wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRule {
    /// Human-readable, unique rule name.
    pub name: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Which risk type this rule applies to.
    pub risk_type: RiskType,
    /// Pattern tested against a risk's matched text.
    pub pattern: String,
    /// How `pattern` is interpreted.
    pub pattern_kind: PatternKind,
    /// Severity of the rule; the highest-severity matching rule wins per
    /// risk (ties keep the earliest rule in the list).
    pub severity: Severity,
    /// Action recorded when this rule wins.
    pub action: Decision,
    /// Disabled rules are ignored by the evaluator.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// How a [`PolicyRule`]'s pattern is matched against a risk's matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Regex search (case-insensitive) against the matched text.
    Regex,
    /// Case-insensitive substring containment.
    Keyword,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_config() {
        let yaml = r#"
version: "1.0"
rules: []
"#;
        let config: RulesConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert!(config.rules.is_empty());
    }

    #[test]
    fn deserialize_full_config() {
        let yaml = r#"
version: "1.0"
rules:
  - name: "block-any-email"
    description: "No email addresses may leave the boundary"
    risk_type: PII
    pattern: "@"
    pattern_kind: keyword
    severity: high
    action: block
  - name: "warn-on-mrn"
    risk_type: PHI
    pattern: "^MRN"
    pattern_kind: regex
    severity: medium
    action: warn
    enabled: false
"#;
        let config: RulesConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.rules.len(), 2);

        let rule0 = &config.rules[0];
        assert_eq!(rule0.name, "block-any-email");
        assert_eq!(rule0.risk_type, risk_scanner::RiskType::Pii);
        assert_eq!(rule0.pattern_kind, PatternKind::Keyword);
        assert_eq!(rule0.severity, risk_scanner::Severity::High);
        assert_eq!(rule0.action, Decision::Block);
        assert!(rule0.enabled, "enabled should default to true");

        let rule1 = &config.rules[1];
        assert_eq!(rule1.pattern_kind, PatternKind::Regex);
        assert!(!rule1.enabled);
        assert!(rule1.description.is_none());
    }

    #[test]
    fn deserialize_manipulation_rule() {
        let yaml = r#"
version: "1.0"
rules:
  - name: "redact-injections"
    risk_type: MANIPULATION_ATTEMPT
    pattern: "ignore"
    pattern_kind: keyword
    severity: low
    action: redact
"#;
        let config: RulesConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(
            config.rules[0].risk_type,
            risk_scanner::RiskType::ManipulationAttempt
        );
        assert_eq!(config.rules[0].action, Decision::Redact);
    }

    #[test]
    fn serialized_rule_omits_missing_description() {
        let rule = PolicyRule {
            name: "r".to_string(),
            description: None,
            risk_type: risk_scanner::RiskType::Pii,
            pattern: "x".to_string(),
            pattern_kind: PatternKind::Keyword,
            severity: risk_scanner::Severity::Low,
            action: Decision::Warn,
            enabled: true,
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(!json.contains("description"));
    }
}
