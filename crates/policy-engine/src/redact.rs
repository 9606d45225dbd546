//! Span redaction.
//!
//! Replaces matched risk spans with stable placeholder tokens of the form
//! `[<PATTERN_NAME>_REDACTED]`, walking the risks left-to-right and carrying
//! an offset for the length drift each replacement introduces.

use risk_scanner::RiskMatch;

/// Replace every risk's span in `text` with its placeholder token.
///
/// Risks are applied in ascending span order.  A replacement whose
/// offset-adjusted span no longer fits the current text -- or no longer
/// falls on `char` boundaries -- is skipped and the text at that location is
/// left as-is; this keeps the walk total in the face of out-of-range or
/// overlapping spans.
///
/// Overlapping spans from different rules are *not* merged: each one mutates
/// the string independently, and a later replacement lands on
/// offset-adjusted coordinates of the already-mutated text.  See the
/// overlap tests below for the resulting behavior.
pub fn redact_text(text: &str, risks: &[RiskMatch]) -> String {
    if risks.is_empty() {
        return text.to_string();
    }

    let mut sorted: Vec<&RiskMatch> = risks.iter().collect();
    sorted.sort_by_key(|r| r.span.start);

    let mut redacted = text.to_string();
    let mut offset: i64 = 0;

    for risk in sorted {
        let start = risk.span.start as i64 + offset;
        let end = risk.span.end as i64 + offset;

        if start < 0 || end > redacted.len() as i64 || start > end {
            continue;
        }
        let (start, end) = (start as usize, end as usize);
        if !redacted.is_char_boundary(start) || !redacted.is_char_boundary(end) {
            continue;
        }

        let replacement = format!("[{}_REDACTED]", risk.pattern_name.to_uppercase());
        offset += replacement.len() as i64 - (end - start) as i64;
        redacted.replace_range(start..end, &replacement);
    }

    redacted
}
