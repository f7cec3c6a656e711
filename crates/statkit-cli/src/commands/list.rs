use anyhow::Result;
use clap::Args;
use statkit_ingest as ingest;
use statkit_report::{json, terminal};
use std::path::PathBuf;

use super::{resolve_registry, resolve_sessions_dir};

#[derive(Args)]
pub struct ListArgs {
    /// Transcript directory (default: ~/.openclaw/agents/main/sessions)
    #[arg(long)]
    pub sessions_dir: Option<PathBuf>,

    /// Label registry file (default: sessions.json beside the transcripts)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Output format: table, json
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub fn run(args: ListArgs) -> Result<()> {
    let sessions_dir = resolve_sessions_dir(args.sessions_dir)?;
    let registry = resolve_registry(args.registry, &sessions_dir);

    let report = ingest::collect_report(&sessions_dir, &registry);

    match args.format.as_str() {
        "json" => println!("{}", json::render_report(&report)?),
        _ => terminal::print_report(&report),
    }
    Ok(())
}
