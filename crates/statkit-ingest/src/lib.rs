pub mod extract;
pub mod registry;

use chrono::{SecondsFormat, Utc};
use statkit_core::{AggregateReport, Totals};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use extract::*;
pub use registry::*;

/// Name of the registry file kept beside the transcripts.
pub const REGISTRY_FILE: &str = "sessions.json";

/// A transcript stream discovered on disk, prior to extraction.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub session_id: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Find every `*.jsonl` transcript directly under `dir`, largest first.
/// The report preserves this ordering; it only affects display.
pub fn discover_transcripts(dir: &Path) -> Vec<Transcript> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut transcripts = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        transcripts.push(Transcript {
            session_id: stem.to_string(),
            path: path.to_path_buf(),
            size,
        });
    }

    transcripts.sort_by(|a, b| b.size.cmp(&a.size));
    transcripts
}

/// Run the full pipeline: discover transcripts, extract each one in order,
/// fold running totals, then enrich labels when a registry is readable.
/// One bad stream or a broken registry never aborts the report.
pub fn collect_report(sessions_dir: &Path, registry_path: &Path) -> AggregateReport {
    let mut sessions = Vec::new();
    let mut totals = Totals::default();

    for transcript in discover_transcripts(sessions_dir) {
        let Extraction { summary, error } =
            extract_transcript(&transcript.path, &transcript.session_id);
        if let Some(e) = error {
            eprintln!("warn: {}", e);
        }
        totals.add(&summary);
        sessions.push(summary);
    }
    totals.finish();

    match load_registry(registry_path) {
        Ok(Some(registry)) => apply_labels(&mut sessions, &registry),
        Ok(None) => {}
        Err(e) => eprintln!("warn: {:#}", e),
    }

    AggregateReport {
        last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        sessions,
        totals,
    }
}

/// Default transcript root, resolved from $HOME.
pub fn default_sessions_root() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".openclaw")
            .join("agents")
            .join("main")
            .join("sessions")
    })
}

pub fn default_registry_path(sessions_dir: &Path) -> PathBuf {
    sessions_dir.join(REGISTRY_FILE)
}
