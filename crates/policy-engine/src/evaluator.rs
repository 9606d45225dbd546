//! Decision engine.
//!
//! Two state-free entry points turn detected risks into a [`Decision`]:
//! [`determine_action`] applies the default severity policy, and
//! [`apply_policy_rules`] evaluates an externally supplied rule set,
//! falling back to the default policy whenever the rules do not speak.
//!
//! Both functions are total: empty risk lists and empty rule sets are
//! ordinary inputs, never errors.

use risk_scanner::{RiskMatch, RiskType, Severity};

use crate::decision::Decision;
use crate::matcher::rule_matches_risk;
use crate::schema::PolicyRule;

// ---------------------------------------------------------------------------
// Default severity policy
// ---------------------------------------------------------------------------

/// Decide the action for one inspection.
///
/// Prompt and response risks are considered together.  When `custom_rules`
/// is non-empty the decision is delegated to [`apply_policy_rules`];
/// otherwise the default severity policy applies:
///
/// * any manipulation attempt, or any high-severity risk → [`Decision::Block`]
/// * any high-severity PII/PHI, or highest severity medium → [`Decision::Redact`]
/// * highest severity low → [`Decision::Warn`]
/// * otherwise → [`Decision::Allow`]
pub fn determine_action(
    prompt_risks: &[RiskMatch],
    response_risks: &[RiskMatch],
    custom_rules: &[PolicyRule],
) -> Decision {
    if prompt_risks.is_empty() && response_risks.is_empty() {
        return Decision::Allow;
    }

    if !custom_rules.is_empty() {
        let mut all_risks = prompt_risks.to_vec();
        all_risks.extend_from_slice(response_risks);
        return apply_policy_rules(&all_risks, custom_rules);
    }

    let all = || prompt_risks.iter().chain(response_risks.iter());

    let highest = highest_severity(all());
    let has_manipulation = all().any(|r| r.risk_type == RiskType::ManipulationAttempt);
    let has_high_sensitive = all().any(|r| {
        matches!(r.risk_type, RiskType::Pii | RiskType::Phi) && r.severity == Severity::High
    });

    if has_manipulation || highest == Severity::High {
        return Decision::Block;
    }

    if has_high_sensitive || highest == Severity::Medium {
        return Decision::Redact;
    }

    if highest == Severity::Low {
        return Decision::Warn;
    }

    Decision::Allow
}

/// Highest severity over `risks`, or [`Severity::Low`] when empty.
fn highest_severity<'a>(risks: impl Iterator<Item = &'a RiskMatch>) -> Severity {
    let mut highest = Severity::Low;
    for risk in risks {
        if risk.severity.priority() > highest.priority() {
            highest = risk.severity;
        }
    }
    highest
}

// ---------------------------------------------------------------------------
// Custom rule path
// ---------------------------------------------------------------------------

/// Evaluate an externally supplied rule set over the combined risk list.
///
/// Per risk, every enabled matching rule (see
/// [`rule_matches_risk`](crate::matcher::rule_matches_risk)) competes and the
/// highest-severity one records its action; ties keep the earliest rule in
/// the list.  The result is the strictest recorded action.  When the rules
/// never speak -- nothing enabled, no risk matched, or no risks at all --
/// the default severity policy decides instead.
pub fn apply_policy_rules(risks: &[RiskMatch], rules: &[PolicyRule]) -> Decision {
    if risks.is_empty() || rules.is_empty() {
        return determine_action(risks, &[], &[]);
    }

    let enabled: Vec<&PolicyRule> = rules.iter().filter(|r| r.enabled).collect();
    if enabled.is_empty() {
        return determine_action(risks, &[], &[]);
    }

    let mut recorded: Vec<Decision> = Vec::new();

    for risk in risks {
        // The winning rule is the highest-severity match; on ties the first
        // rule in list order wins.
        let mut winner: Option<&PolicyRule> = None;
        for rule in enabled
            .iter()
            .copied()
            .filter(|rule| rule_matches_risk(rule, risk))
        {
            let beats_current = match winner {
                Some(best) => rule.severity.priority() > best.severity.priority(),
                None => true,
            };
            if beats_current {
                winner = Some(rule);
            }
        }
        if let Some(rule) = winner {
            recorded.push(rule.action);
        }
    }

    if recorded.is_empty() {
        return determine_action(risks, &[], &[]);
    }

    // Strictest recorded action wins; Allow is the identity.
    let mut strictest = Decision::Allow;
    for action in recorded {
        if action.priority() > strictest.priority() {
            strictest = action;
        }
    }
    strictest
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
