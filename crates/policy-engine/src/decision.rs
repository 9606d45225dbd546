use serde::{Deserialize, Serialize};
use std::fmt;

/// The action the firewall takes for an inspected exchange, totally ordered
/// by strictness: `Block > Redact > Warn > Allow`.
///
/// Ordering goes through [`Decision::priority`] rather than a derived `Ord`
/// so the ranking stays explicit and independent of declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Reject the exchange outright; the text is discarded.
    Block,
    /// Pass the exchange through with matched spans replaced by placeholder
    /// tokens.
    Redact,
    /// Pass the text through unchanged but surface the detected risks.
    Warn,
    /// Nothing detected; pass through untouched.
    Allow,
}

impl Decision {
    /// Integer rank used for strictness comparison (higher = stricter).
    pub fn priority(self) -> u8 {
        match self {
            Self::Block => 4,
            Self::Redact => 3,
            Self::Warn => 2,
            Self::Allow => 1,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block => write!(f, "block"),
            Self::Redact => write!(f, "redact"),
            Self::Warn => write!(f, "warn"),
            Self::Allow => write!(f, "allow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_are_strictly_ordered() {
        assert!(Decision::Block.priority() > Decision::Redact.priority());
        assert!(Decision::Redact.priority() > Decision::Warn.priority());
        assert!(Decision::Warn.priority() > Decision::Allow.priority());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Decision::Block).unwrap(), "\"block\"");
        assert_eq!(serde_json::to_string(&Decision::Allow).unwrap(), "\"allow\"");
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(Decision::Redact.to_string(), "redact");
        assert_eq!(Decision::Warn.to_string(), "warn");
    }
}
