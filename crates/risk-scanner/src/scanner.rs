//! Low-level scanner that checks a text string against one pattern catalogue
//! and returns structured [`RiskMatch`] values.

use regex::{Regex, RegexSet};
use tracing::warn;

use crate::patterns::RiskPattern;
use crate::risk::{RiskMatch, Span};

// ---------------------------------------------------------------------------
// Compiled rule
// ---------------------------------------------------------------------------

/// One catalogue entry together with its compiled regex.
struct CompiledRule {
    def: &'static RiskPattern,
    regex: Regex,
}

// ---------------------------------------------------------------------------
// RuleScanner
// ---------------------------------------------------------------------------

/// Compiled scanner over a pattern catalogue.
///
/// Every pattern is compiled individually; a pattern that fails to compile is
/// skipped with a warning so one bad entry never disables the rest of the
/// table.  A [`RegexSet`] built from the surviving patterns serves as a cheap
/// prefilter that decides *which* rules need a detailed pass.
pub struct RuleScanner {
    /// Successfully compiled rules, in catalogue order.
    rules: Vec<CompiledRule>,
    /// Prefilter over `rules` (same indices).  `None` when construction of
    /// the set failed, in which case every rule gets a detailed pass.
    prefilter: Option<RegexSet>,
    /// Number of catalogue entries dropped at construction time.
    skipped: usize,
}

impl RuleScanner {
    /// Compile `catalogue` into a ready-to-use scanner.
    pub fn new(catalogue: &'static [RiskPattern]) -> Self {
        let mut rules = Vec::with_capacity(catalogue.len());
        let mut skipped = 0;

        for def in catalogue {
            match Regex::new(def.pattern) {
                Ok(regex) => rules.push(CompiledRule { def, regex }),
                Err(e) => {
                    skipped += 1;
                    warn!(
                        pattern = def.name,
                        error = %e,
                        "failed to compile risk pattern; skipping rule"
                    );
                }
            }
        }

        let prefilter = match RegexSet::new(rules.iter().map(|r| r.def.pattern)) {
            Ok(set) => Some(set),
            Err(e) => {
                warn!(error = %e, "failed to build pattern prefilter; scanning all rules");
                None
            }
        };

        Self {
            rules,
            prefilter,
            skipped,
        }
    }

    /// Scan `text` and return one [`RiskMatch`] per occurrence.
    ///
    /// Rules are evaluated independently and in catalogue order; within one
    /// rule, matches are enumerated left-to-right (non-overlapping).  The
    /// output order is therefore stable for a fixed catalogue and input, and
    /// overlapping matches from *different* rules are all retained.
    pub fn scan(&self, text: &str) -> Vec<RiskMatch> {
        let candidates = self.prefilter.as_ref().map(|set| set.matches(text));

        let mut matches = Vec::new();

        for (idx, rule) in self.rules.iter().enumerate() {
            if let Some(candidates) = &candidates {
                if !candidates.matched(idx) {
                    continue;
                }
            }

            // A single rule may match multiple times in the text.
            for m in rule.regex.find_iter(text) {
                matches.push(RiskMatch {
                    risk_type: rule.def.risk_type,
                    pattern_name: rule.def.name.to_string(),
                    matched_text: m.as_str().to_string(),
                    span: Span {
                        start: m.start(),
                        end: m.end(),
                    },
                    severity: rule.def.severity,
                    explanation: rule.def.explanation.to_string(),
                });
            }
        }

        matches
    }

    /// Number of successfully compiled rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of catalogue entries that failed to compile and were dropped.
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }
}
