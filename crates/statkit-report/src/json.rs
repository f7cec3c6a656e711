use anyhow::Result;
use statkit_core::AggregateReport;

pub fn render_report(report: &AggregateReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
