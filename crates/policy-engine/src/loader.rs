use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::schema::RulesConfig;

/// Load a [`RulesConfig`] from a YAML file on disk.
///
/// Validates the config after deserialization (version check, non-empty
/// names and patterns, unique rule names).  Rules that pass here satisfy the
/// evaluator's input contract, so downstream code never re-validates.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RulesConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file: {}", path.display()))?;
    load_rules_from_str(&contents)
        .with_context(|| format!("failed to parse rules file: {}", path.display()))
}

/// Parse and validate a [`RulesConfig`] from a YAML string.
///
/// This is the primary entry point used in tests.
pub fn load_rules_from_str(yaml: &str) -> Result<RulesConfig> {
    let config: RulesConfig =
        serde_yml::from_str(yaml).context("YAML deserialization failed")?;
    validate(&config)?;
    Ok(config)
}

/// Run post-deserialization validation checks.
fn validate(config: &RulesConfig) -> Result<()> {
    // Version gate
    if config.version != "1.0" {
        bail!(
            "unsupported rules version '{}'; only '1.0' is supported",
            config.version
        );
    }

    let mut seen = HashSet::new();
    for rule in &config.rules {
        if rule.name.is_empty() {
            bail!("rule name must not be empty");
        }
        if rule.pattern.is_empty() {
            bail!("rule '{}' has an empty pattern", rule.name);
        }
        if !seen.insert(&rule.name) {
            bail!("duplicate rule name: '{}'", rule.name);
        }
    }

    Ok(())
}
