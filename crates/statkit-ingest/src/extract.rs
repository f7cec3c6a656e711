/// OpenClaw transcript extractor.
/// Format: <session-id>.jsonl, one JSON record per line. "message" records
/// carry role, content blocks, and usage; any other record only contributes
/// its timestamp. Malformed lines are expected noise.
use serde_json::Value;
use statkit_core::{f64_field, round4, str_field, u64_field, SessionSummary};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Content-item discriminators that count as one tool invocation.
/// Older transcripts write "toolCall", current ones "tool_use".
const TOOL_MARKERS: [&str; 2] = ["tool_use", "toolCall"];

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("opening {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading {path} at line {line}: {source}")]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// One extraction pass over a transcript. `summary` is always populated:
/// on a stream failure it holds whatever accumulated before the failure,
/// and `error` lets the caller tell a dead stream from an idle one.
#[derive(Debug)]
pub struct Extraction {
    pub summary: SessionSummary,
    pub error: Option<StreamError>,
}

pub fn extract_transcript(path: &Path, session_id: &str) -> Extraction {
    let mut summary = SessionSummary::new(session_id);
    let mut user_messages = 0u64;
    let mut assistant_messages = 0u64;
    let mut cost = 0.0f64;
    let mut error = None;

    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return Extraction {
                summary,
                error: Some(StreamError::Open {
                    path: path.to_path_buf(),
                    source: e,
                }),
            }
        }
    };

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error = Some(StreamError::Read {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source: e,
                });
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(_) => continue,
        };

        // Last-seen-wins, in file order. Not max: an out-of-order line is
        // still the last thing the session wrote.
        if let Some(ts) = str_field(&record, "timestamp") {
            summary.last_activity = Some(ts.to_string());
        }

        if str_field(&record, "type") != Some("message") {
            continue;
        }
        let Some(message) = record.get("message") else {
            continue;
        };

        match str_field(message, "role") {
            Some("user") => user_messages += 1,
            Some("assistant") => {
                assistant_messages += 1;

                if let Some(content) = message.get("content").and_then(|v| v.as_array()) {
                    summary.tool_calls += content
                        .iter()
                        .filter(|item| {
                            str_field(item, "type").is_some_and(|t| TOOL_MARKERS.contains(&t))
                        })
                        .count() as u64;
                }

                if let Some(usage) = message.get("usage") {
                    summary.tokens_in += u64_field(usage, "input");
                    summary.tokens_out += u64_field(usage, "output");
                    if let Some(cost_block) = usage.get("cost") {
                        cost += f64_field(cost_block, "total");
                    }
                }
            }
            _ => {}
        }
    }

    summary.message_count = user_messages + assistant_messages;
    summary.cost_usd = round4(cost);
    Extraction { summary, error }
}
