//! High-level detectors that wrap a [`RuleScanner`](crate::scanner::RuleScanner)
//! over one of the built-in catalogues.
//!
//! Both detectors are pure: `detect` has no observable side effects and is
//! deterministic for a fixed catalogue and input, so a single instance can be
//! shared freely across threads.

use crate::patterns::{MANIPULATION_PATTERNS, SENSITIVE_DATA_PATTERNS};
use crate::risk::RiskMatch;
use crate::scanner::RuleScanner;

// ---------------------------------------------------------------------------
// SensitiveDataDetector
// ---------------------------------------------------------------------------

/// Detects exposure of personal and health-related identifiers.
///
/// # Example
///
/// ```rust
/// use risk_scanner::SensitiveDataDetector;
///
/// let detector = SensitiveDataDetector::new();
/// let risks = detector.detect("Contact john.doe@example.com");
/// assert_eq!(risks.len(), 1);
/// assert_eq!(risks[0].pattern_name, "email");
/// ```
pub struct SensitiveDataDetector {
    scanner: RuleScanner,
}

impl SensitiveDataDetector {
    /// Build a detector over [`SENSITIVE_DATA_PATTERNS`].
    pub fn new() -> Self {
        Self {
            scanner: RuleScanner::new(SENSITIVE_DATA_PATTERNS),
        }
    }

    /// Scan `text` for sensitive identifiers.
    pub fn detect(&self, text: &str) -> Vec<RiskMatch> {
        self.scanner.scan(text)
    }

    /// Number of active detection rules.
    pub fn rule_count(&self) -> usize {
        self.scanner.rule_count()
    }
}

impl Default for SensitiveDataDetector {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// ManipulationDetector
// ---------------------------------------------------------------------------

/// Detects attempts to override, extract, or bypass system instructions.
pub struct ManipulationDetector {
    scanner: RuleScanner,
}

impl ManipulationDetector {
    /// Build a detector over [`MANIPULATION_PATTERNS`].
    pub fn new() -> Self {
        Self {
            scanner: RuleScanner::new(MANIPULATION_PATTERNS),
        }
    }

    /// Scan `text` for manipulation attempts.
    pub fn detect(&self, text: &str) -> Vec<RiskMatch> {
        self.scanner.scan(text)
    }

    /// Number of active detection rules.
    pub fn rule_count(&self) -> usize {
        self.scanner.rule_count()
    }
}

impl Default for ManipulationDetector {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
