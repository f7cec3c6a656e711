pub mod collect;
pub mod list;

use anyhow::Result;
use statkit_ingest as ingest;
use std::path::{Path, PathBuf};

/// Resolve the transcript directory: explicit flag, else the default root.
pub fn resolve_sessions_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    flag.or_else(ingest::default_sessions_root).ok_or_else(|| {
        anyhow::anyhow!("no transcript directory (HOME is unset); pass --sessions-dir")
    })
}

/// Resolve the registry path: explicit flag, else beside the transcripts.
pub fn resolve_registry(flag: Option<PathBuf>, sessions_dir: &Path) -> PathBuf {
    flag.unwrap_or_else(|| ingest::default_registry_path(sessions_dir))
}
