/// Session label registry: a JSON object mapping composite keys
/// ("project:subagent:7") to metadata objects carrying a `sessionId`.
/// Sessions with a matching entry take their label from the key;
/// everything else keeps the default.
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use statkit_core::{str_field, SessionSummary, DEFAULT_LABEL};
use std::path::Path;

pub type Registry = Map<String, Value>;

/// Load the registry, if one exists. A missing file is Ok(None); an
/// unreadable or malformed one is an error the caller downgrades to a
/// diagnostic, skipping enrichment entirely.
pub fn load_registry(path: &Path) -> Result<Option<Registry>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let entries: Registry =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(entries))
}

/// Assign each session the label of the first registry entry whose
/// `sessionId` matches. Entries are scanned in file order.
pub fn apply_labels(sessions: &mut [SessionSummary], registry: &Registry) {
    for session in sessions.iter_mut() {
        for (key, meta) in registry {
            if str_field(meta, "sessionId") == Some(session.id.as_str()) {
                session.label = label_from_key(key);
                break;
            }
        }
    }
}

/// "work:subagent:7" → "subagent"; otherwise the last segment of the key,
/// or the default when the key has no usable segment.
pub fn label_from_key(key: &str) -> String {
    let parts: Vec<&str> = key.split(':').collect();
    if parts.contains(&"subagent") {
        return "subagent".to_string();
    }
    match parts.last() {
        Some(last) if !last.is_empty() => (*last).to_string(),
        _ => DEFAULT_LABEL.to_string(),
    }
}
