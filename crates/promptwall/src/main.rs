mod cli;
mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use audit_log::{AuditEntry, AuditEventType, AuditSink, InspectionRecord};
use firewall_core::Firewall;
use policy_engine::{Decision, PolicyRule};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let exit = run(Cli::parse()).await?;
    if exit != 0 {
        std::process::exit(exit);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<i32> {
    // 1. Load config.
    let cfg = config::load(&cli.config)?;

    // 2. Init tracing-subscriber with JSON format.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!(
        config_file = %cli.config.display(),
        "promptwall starting"
    );

    // 3. Require something to inspect.
    if cli.prompt.is_none() && cli.response.is_none() {
        bail!("nothing to inspect: provide --prompt, --response, or both");
    }

    // 4. Start the audit sink.
    let (audit, audit_handle) = AuditSink::start(&cfg.logging.audit_log_path)
        .await
        .context("failed to start audit sink")?;

    audit.log(AuditEntry::new(
        AuditEventType::ServiceStarted,
        "promptwall",
        serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "config_file": cli.config.display().to_string(),
        }),
    ));

    // 5. Load custom rules; the CLI flag wins over the config file.
    let rules_file = cli.rules.clone().or_else(|| cfg.rules.file.clone());
    let custom_rules: Vec<PolicyRule> = match rules_file {
        Some(path) if path.exists() => {
            let rules_config =
                policy_engine::loader::load_rules(&path).context("failed to load rules file")?;
            info!(
                rules_file = %path.display(),
                rule_count = rules_config.rules.len(),
                "custom rules loaded"
            );
            audit.log(AuditEntry::new(
                AuditEventType::RulesLoaded,
                "promptwall",
                serde_json::json!({
                    "rules_file": path.display().to_string(),
                    "rule_count": rules_config.rules.len(),
                }),
            ));
            rules_config.rules
        }
        Some(path) => {
            warn!(
                rules_file = %path.display(),
                "rules file not found; running with the default severity policy"
            );
            Vec::new()
        }
        None => Vec::new(),
    };

    // 6. Build the firewall and run the inspection.
    let firewall = Firewall::new();
    info!(rule_count = firewall.rule_count(), "firewall ready");

    let result = firewall.process(
        cli.prompt.as_deref(),
        cli.response.as_deref(),
        &custom_rules,
    );

    // 7. Print the inspection result as JSON.
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");

    // 8. Record the outcome in the audit trail.
    let event_type = match result.decision {
        Decision::Block => AuditEventType::RequestBlocked,
        Decision::Redact => AuditEventType::TextRedacted,
        Decision::Warn | Decision::Allow => AuditEventType::InspectionCompleted,
    };

    audit.log(
        AuditEntry::new(
            event_type,
            "promptwall",
            serde_json::json!({
                "prompt_present": cli.prompt.is_some(),
                "response_present": cli.response.is_some(),
                "custom_rule_count": custom_rules.len(),
            }),
        )
        .with_outcome(InspectionRecord {
            request_id: result.request_id,
            decision: result.decision.to_string(),
            risk_count: result.risks.len(),
            explanation: result.explanation.clone(),
        }),
    );

    audit.log(AuditEntry::new(
        AuditEventType::ServiceStopped,
        "promptwall",
        serde_json::json!({}),
    ));

    // 9. Shut the sink down; awaiting the handle guarantees the final flush.
    drop(audit);
    audit_handle.await.context("audit writer task panicked")?;

    // Blocked requests get a distinct exit code for shell callers.
    Ok(if result.decision == Decision::Block { 2 } else { 0 })
}
