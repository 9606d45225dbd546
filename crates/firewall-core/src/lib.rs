//! # firewall-core
//!
//! Inspection pipeline for LLM traffic: scan a prompt/response pair for
//! sensitive data and manipulation attempts, pick an enforcement action,
//! and produce a transformed copy of each text plus a human-readable
//! explanation.
//!
//! The pipeline has three stages:
//!
//! 1. **Scan** -- both [`risk_scanner`] detectors run over each text.
//! 2. **Decide** -- [`policy_engine`] folds the findings (and any custom
//!    rules) into a single [`policy_engine::Decision`].
//! 3. **Transform** -- redact or block the texts as the decision demands.
//!
//! ## Quick start
//!
//! ```rust
//! use firewall_core::Firewall;
//! use policy_engine::Decision;
//!
//! let firewall = Firewall::new();
//! let result = firewall.process(Some("My SSN is 123-45-6789"), None, &[]);
//!
//! assert_eq!(result.decision, Decision::Block);
//! assert_eq!(result.prompt_modified.as_deref(), Some("[BLOCKED]"));
//! ```

pub mod firewall;
pub mod report;

// Re-export the whole public surface at the crate root.
pub use firewall::Firewall;
pub use report::InspectionResult;
