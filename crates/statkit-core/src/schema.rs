use serde::{Deserialize, Serialize};

use crate::fields::round4;

/// Classification for sessions with no registry entry.
pub const DEFAULT_LABEL: &str = "main";

/// Usage statistics extracted from one transcript stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub label: String,
    pub message_count: u64,
    pub tool_calls: u64,
    pub tokens_in: u64,
    pub tokens_out: u64,
    #[serde(rename = "costUSD")]
    pub cost_usd: f64,
    /// Last `timestamp` field seen in the stream, in file order.
    pub last_activity: Option<String>,
}

impl SessionSummary {
    pub fn new(id: &str) -> Self {
        SessionSummary {
            id: id.to_string(),
            label: DEFAULT_LABEL.to_string(),
            message_count: 0,
            tool_calls: 0,
            tokens_in: 0,
            tokens_out: 0,
            cost_usd: 0.0,
            last_activity: None,
        }
    }

    pub fn total_tokens(&self) -> u64 {
        self.tokens_in + self.tokens_out
    }
}

/// Running sums across all session summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub messages: u64,
    pub tool_calls: u64,
    pub tokens: u64,
    #[serde(rename = "costUSD")]
    pub cost_usd: f64,
}

impl Totals {
    pub fn add(&mut self, summary: &SessionSummary) {
        self.messages += summary.message_count;
        self.tool_calls += summary.tool_calls;
        self.tokens += summary.total_tokens();
        self.cost_usd += summary.cost_usd;
    }

    /// Round the accumulated cost once, after the last fold.
    pub fn finish(&mut self) {
        self.cost_usd = round4(self.cost_usd);
    }
}

/// The consolidated report handed to the output sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub last_updated: String,
    /// Ordered by descending transcript size at discovery time.
    pub sessions: Vec<SessionSummary>,
    pub totals: Totals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample(cost: f64) -> SessionSummary {
        SessionSummary {
            id: "abc".to_string(),
            label: DEFAULT_LABEL.to_string(),
            message_count: 4,
            tool_calls: 2,
            tokens_in: 100,
            tokens_out: 40,
            cost_usd: cost,
            last_activity: Some("2026-08-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn new_summary_is_all_zero_with_main_label() {
        let s = SessionSummary::new("s1");
        assert_eq!(s.id, "s1");
        assert_eq!(s.label, "main");
        assert_eq!(s.message_count, 0);
        assert_eq!(s.tool_calls, 0);
        assert_eq!(s.total_tokens(), 0);
        assert_eq!(s.cost_usd, 0.0);
        assert!(s.last_activity.is_none());
    }

    #[test]
    fn totals_sum_every_counter() {
        let mut totals = Totals::default();
        totals.add(&sample(0.25));
        totals.add(&sample(0.5));
        totals.finish();
        assert_eq!(totals.messages, 8);
        assert_eq!(totals.tool_calls, 4);
        assert_eq!(totals.tokens, 280);
        assert_eq!(totals.cost_usd, 0.75);
    }

    #[test]
    fn totals_round_once_after_the_last_fold() {
        // Two sessions already rounded up at the 4th decimal keep their
        // individual rounding in the total.
        let mut totals = Totals::default();
        totals.add(&sample(0.0001));
        totals.add(&sample(0.0001));
        totals.finish();
        assert_eq!(totals.cost_usd, 0.0002);
    }

    #[test]
    fn summary_serializes_with_report_field_names() {
        let v: Value = serde_json::to_value(sample(0.1234)).unwrap();
        let obj = v.as_object().unwrap();
        for key in [
            "id",
            "label",
            "messageCount",
            "toolCalls",
            "tokensIn",
            "tokensOut",
            "costUSD",
            "lastActivity",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn report_serializes_with_report_field_names() {
        let report = AggregateReport {
            last_updated: "2026-08-01T00:00:00.000000Z".to_string(),
            sessions: vec![sample(0.1)],
            totals: Totals::default(),
        };
        let v: Value = serde_json::to_value(&report).unwrap();
        let obj = v.as_object().unwrap();
        assert!(obj.contains_key("lastUpdated"));
        assert!(obj.contains_key("sessions"));
        let totals = obj["totals"].as_object().unwrap();
        for key in ["messages", "toolCalls", "tokens", "costUSD"] {
            assert!(totals.contains_key(key), "missing totals key {key}");
        }
    }
}
