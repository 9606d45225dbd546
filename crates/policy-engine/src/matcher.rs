use regex::RegexBuilder;

use risk_scanner::RiskMatch;

use crate::schema::{PatternKind, PolicyRule};

/// Check whether `rule` applies to `risk`.
///
/// The rule's risk type must equal the risk's type, and the rule's pattern
/// must match the risk's matched text:
///
/// * [`PatternKind::Regex`] -- the pattern is compiled case-insensitively
///   and searched anywhere in the matched text.  An invalid pattern is
///   treated as a non-match, never an error.
/// * [`PatternKind::Keyword`] -- case-insensitive substring containment.
pub fn rule_matches_risk(rule: &PolicyRule, risk: &RiskMatch) -> bool {
    if rule.risk_type != risk.risk_type {
        return false;
    }

    match rule.pattern_kind {
        PatternKind::Regex => {
            match RegexBuilder::new(&rule.pattern).case_insensitive(true).build() {
                Ok(re) => re.is_match(&risk.matched_text),
                Err(e) => {
                    tracing::warn!(
                        rule = %rule.name,
                        pattern = %rule.pattern,
                        error = %e,
                        "failed to compile rule regex; treating as non-match"
                    );
                    false
                }
            }
        }
        PatternKind::Keyword => risk
            .matched_text
            .to_lowercase()
            .contains(&rule.pattern.to_lowercase()),
    }
}
