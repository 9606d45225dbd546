//! # policy-engine
//!
//! Decision logic for the prompt firewall.  This crate turns the risks
//! emitted by [`risk_scanner`] into a single [`Decision`], loads custom
//! YAML rule sets that override the default severity policy, and performs
//! span redaction plus human-readable explanations for the chosen action.
//!
//! ## Quick start
//!
//! ```rust
//! use policy_engine::{determine_action, Decision};
//! use risk_scanner::SensitiveDataDetector;
//!
//! let detector = SensitiveDataDetector::new();
//! let risks = detector.detect("my email is a@b.com");
//! let decision = determine_action(&risks, &[], &[]);
//! assert_eq!(decision, Decision::Redact);
//! ```

mod decision;
mod evaluator;
mod explain;
pub mod loader;
pub mod matcher;
mod redact;
mod schema;

// Re-export primary public API at crate root.
pub use decision::Decision;
pub use evaluator::{apply_policy_rules, determine_action};
pub use explain::generate_explanation;
pub use redact::redact_text;
pub use schema::{PatternKind, PolicyRule, RulesConfig};
