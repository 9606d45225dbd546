use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptwall", version, about = "Prompt firewall for LLM traffic")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "promptwall.yaml")]
    pub config: PathBuf,

    /// Path to the custom rules file (overrides config file setting)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Prompt text to inspect
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Response text to inspect
    #[arg(long)]
    pub response: Option<String>,

    /// Pretty-print the inspection result JSON
    #[arg(long)]
    pub pretty: bool,
}
