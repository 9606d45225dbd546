//! Shared risk model.
//!
//! Both detectors emit the same [`RiskMatch`] type; the [`RiskType`] tag is
//! what distinguishes a sensitive-data hit from a manipulation attempt, so
//! downstream consumers (decision engine, redactor, audit trail) never need
//! to care which detector produced a match.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RiskType
// ---------------------------------------------------------------------------

/// Broad classification of a detected risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskType {
    /// Personally identifiable information (email addresses, SSNs, card
    /// numbers, ...).
    Pii,
    /// Protected health information (medical record numbers, ...).
    Phi,
    /// An attempt to override, extract, or bypass system instructions
    /// ("prompt injection").
    ManipulationAttempt,
    /// Reserved for risks injected by external callers; no built-in pattern
    /// produces this.
    Other,
}

impl fmt::Display for RiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pii => write!(f, "PII"),
            Self::Phi => write!(f, "PHI"),
            Self::ManipulationAttempt => write!(f, "MANIPULATION_ATTEMPT"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a detected risk, ordered `High > Medium > Low`.
///
/// Ordering goes through [`Severity::priority`] rather than a derived
/// `Ord` so the ranking stays explicit and stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Integer rank used for comparisons (higher = more severe).
    pub fn priority(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

// ---------------------------------------------------------------------------
// Span
// ---------------------------------------------------------------------------

/// Half-open `[start, end)` byte range of a match within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

// ---------------------------------------------------------------------------
// RiskMatch
// ---------------------------------------------------------------------------

/// A single detected occurrence of a risk.
///
/// Created by a detector, immutable from then on; consumed by the decision
/// engine and the redactor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMatch {
    /// Classification of the risk.
    pub risk_type: RiskType,
    /// Stable identifier of the rule that fired.  Used for redaction labels
    /// and explanation grouping.
    pub pattern_name: String,
    /// The exact substring that matched.
    pub matched_text: String,
    /// Where the match sits in the source text.
    pub span: Span,
    /// How severe the exposure is.
    pub severity: Severity,
    /// Human-readable description of why the match fired.
    pub explanation: String,
}
