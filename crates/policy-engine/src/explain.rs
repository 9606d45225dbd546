//! Human-readable decision summaries.

use risk_scanner::{RiskMatch, RiskType};

/// Fixed summary for a clean inspection.
const NO_RISKS: &str = "No security risks detected. Request allowed.";

/// Build a one-line summary of the detected risks.
///
/// Risks are grouped by type in first-seen order and each group contributes
/// one clause: manipulation attempts list up to three of their explanations,
/// PII/PHI groups list their distinct pattern names.  Clauses are joined
/// with `"; "`.  Externally tagged [`RiskType::Other`] risks contribute no
/// clause of their own.
pub fn generate_explanation(risks: &[RiskMatch]) -> String {
    if risks.is_empty() {
        return NO_RISKS.to_string();
    }

    // Group by risk type, preserving the order each type first appears.
    let mut groups: Vec<(RiskType, Vec<&RiskMatch>)> = Vec::new();
    for risk in risks {
        match groups.iter_mut().find(|(t, _)| *t == risk.risk_type) {
            Some((_, members)) => members.push(risk),
            None => groups.push((risk.risk_type, vec![risk])),
        }
    }

    let mut clauses: Vec<String> = Vec::new();

    for (risk_type, members) in &groups {
        let count = members.len();
        match risk_type {
            RiskType::ManipulationAttempt => {
                let samples: Vec<&str> = members
                    .iter()
                    .take(3)
                    .map(|r| r.explanation.as_str())
                    .collect();
                clauses.push(format!(
                    "Detected {count} prompt injection attempt(s): {}",
                    samples.join(", ")
                ));
            }
            RiskType::Pii | RiskType::Phi => {
                // Distinct pattern names, first-seen order.
                let mut names: Vec<&str> = Vec::new();
                for r in members {
                    if !names.contains(&r.pattern_name.as_str()) {
                        names.push(r.pattern_name.as_str());
                    }
                }
                clauses.push(format!(
                    "Detected {count} {risk_type} item(s): {}",
                    names.join(", ")
                ));
            }
            RiskType::Other => {}
        }
    }

    clauses.join("; ")
}
