use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use statkit_ingest as ingest;
use statkit_report::json;
use std::path::PathBuf;

use super::{resolve_registry, resolve_sessions_dir};

/// Default report destination, relative to the working directory.
pub const DEFAULT_OUT: &str = "session-stats.json";

#[derive(Args, Default)]
pub struct CollectArgs {
    /// Transcript directory (default: ~/.openclaw/agents/main/sessions)
    #[arg(long)]
    pub sessions_dir: Option<PathBuf>,

    /// Label registry file (default: sessions.json beside the transcripts)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Report destination (default: session-stats.json)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: CollectArgs) -> Result<()> {
    let sessions_dir = resolve_sessions_dir(args.sessions_dir)?;
    let registry = resolve_registry(args.registry, &sessions_dir);
    let out = args.out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));

    let report = ingest::collect_report(&sessions_dir, &registry);
    let content = json::render_report(&report)?;

    // The destination is the one place a failure is fatal.
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(&out, &content).with_context(|| format!("writing {}", out.display()))?;
    eprintln!("{} Written to {}", "✓".green(), out.display());

    println!("{}", content);
    Ok(())
}
