//! Built-in pattern catalogues.
//!
//! Two static rule tables drive the detectors: one for sensitive-data
//! exposure (PII/PHI), one for manipulation attempts.  Each entry carries a
//! stable snake_case name, the [`RiskType`] and [`Severity`] it reports, a
//! regex string compiled at scanner-construction time, and the explanation
//! attached to every match it produces.

use crate::risk::{RiskType, Severity};

// ---------------------------------------------------------------------------
// Pattern definition
// ---------------------------------------------------------------------------

/// A single detection rule.
pub struct RiskPattern {
    /// Short, snake_case identifier used in logs, findings, and redaction
    /// labels (`[<NAME>_REDACTED]`).
    pub name: &'static str,
    /// Risk classification reported for every match.
    pub risk_type: RiskType,
    /// Severity reported for every match.
    pub severity: Severity,
    /// A regex string (compiled by [`crate::scanner::RuleScanner`]).
    pub pattern: &'static str,
    /// Explanation attached to every match of this rule.
    pub explanation: &'static str,
}

// ---------------------------------------------------------------------------
// Sensitive-data catalogue
// ---------------------------------------------------------------------------

/// Patterns indicating exposure of personal or health-related identifiers.
///
/// Kept as a static slice so the table is shared read-only by every scanner
/// instance.  Matching is case-insensitive; word boundaries delimit the
/// numeric patterns so digit runs embedded in longer numbers do not fire.
pub static SENSITIVE_DATA_PATTERNS: &[RiskPattern] = &[
    RiskPattern {
        name: "email",
        risk_type: RiskType::Pii,
        severity: Severity::Medium,
        pattern: r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        explanation: "Email address detected",
    },
    RiskPattern {
        name: "ssn",
        risk_type: RiskType::Pii,
        severity: Severity::High,
        pattern: r"(?i)\b\d{3}-\d{2}-\d{4}\b",
        explanation: "Social Security Number detected",
    },
    RiskPattern {
        name: "phone",
        risk_type: RiskType::Pii,
        severity: Severity::Medium,
        pattern: r"(?i)\b\d{3}[-.]?\d{3}[-.]?\d{4}\b|\(\d{3}\)\s?\d{3}[-.]?\d{4}",
        explanation: "Phone number detected",
    },
    RiskPattern {
        name: "credit_card",
        risk_type: RiskType::Pii,
        severity: Severity::High,
        pattern: r"(?i)\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b",
        explanation: "Credit card number detected",
    },
    RiskPattern {
        name: "medical_record_number",
        risk_type: RiskType::Phi,
        severity: Severity::High,
        pattern: r"(?i)\bMRN?-?\d{6,}\b",
        explanation: "Medical record number detected",
    },
];

// ---------------------------------------------------------------------------
// Manipulation catalogue
// ---------------------------------------------------------------------------

/// Patterns indicating attempts to override, extract, or bypass system
/// instructions.
///
/// All entries use `(?is)`: case-insensitive, and the wildcard portions span
/// embedded line breaks so an attempt split across lines still fires.
pub static MANIPULATION_PATTERNS: &[RiskPattern] = &[
    RiskPattern {
        name: "ignore_previous_instructions",
        risk_type: RiskType::ManipulationAttempt,
        severity: Severity::High,
        pattern: r"(?is)(ignore|forget|disregard|override).*(previous|prior|earlier|above|before).*(instruction|directive|command|rule|guideline|prompt)",
        explanation: "Attempt to ignore previous instructions detected",
    },
    RiskPattern {
        name: "role_playing_jailbreak",
        risk_type: RiskType::ManipulationAttempt,
        severity: Severity::High,
        pattern: r"(?is)(you are now|pretend to be|act as|roleplay as|you become|you're now).*(different|new|unrestricted|unlimited|free|no restrictions|no limits|no rules|helpful assistant)",
        explanation: "Role-playing jailbreak attempt detected",
    },
    RiskPattern {
        name: "system_prompt_extraction",
        risk_type: RiskType::ManipulationAttempt,
        severity: Severity::High,
        pattern: r"(?is)(show|reveal|display|tell|give|provide|share|output|print).*(system|original|initial|starting|base).*(prompt|instruction|directive|command|guideline)",
        explanation: "System prompt extraction attempt detected",
    },
    RiskPattern {
        name: "instruction_override",
        risk_type: RiskType::ManipulationAttempt,
        severity: Severity::High,
        pattern: r"(?is)(new|updated|different|override|replace).*(instruction|directive|command|rule|guideline|prompt)",
        explanation: "Instruction override attempt detected",
    },
    RiskPattern {
        name: "bypass_attempt",
        risk_type: RiskType::ManipulationAttempt,
        severity: Severity::High,
        pattern: r"(?is)(bypass|circumvent|avoid|skip|ignore).*(safety|security|restriction|limit|guideline|rule|filter)",
        explanation: "Safety bypass attempt detected",
    },
    RiskPattern {
        name: "encoding_obfuscation",
        risk_type: RiskType::ManipulationAttempt,
        severity: Severity::Medium,
        pattern: r"(?is)(decode|decrypt|unscramble|interpret).*(this|the following|below).*([0-9a-f]{16,}|[A-Z0-9+/=]{20,})",
        explanation: "Possible encoding/obfuscation attempt detected",
    },
];
