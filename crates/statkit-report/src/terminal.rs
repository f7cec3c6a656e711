use colored::Colorize;
use statkit_core::AggregateReport;

// ── formatting helpers ────────────────────────────────────────────────────────

pub fn fmt_cost(cost: f64) -> String {
    format!("${:.4}", cost)
}

pub fn fmt_tokens(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

// ── session table ─────────────────────────────────────────────────────────────

pub fn print_report(report: &AggregateReport) {
    if report.sessions.is_empty() {
        println!("{}", "No sessions found.".yellow());
        return;
    }

    let (w_id, w_label, w_msgs, w_tools, w_in, w_out, w_cost) = (38, 10, 5, 6, 8, 8, 10);

    println!(
        "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}  {:>w4$}  {:>w5$}  {:>w6$}  {}",
        "SESSION ID".bold(),
        "LABEL".bold(),
        "MSGS".bold(),
        "TOOLS".bold(),
        "TOK IN".bold(),
        "TOK OUT".bold(),
        "COST".bold(),
        "LAST ACTIVITY".bold(),
        w0 = w_id,
        w1 = w_label,
        w2 = w_msgs,
        w3 = w_tools,
        w4 = w_in,
        w5 = w_out,
        w6 = w_cost,
    );
    println!(
        "{}",
        "─".repeat(w_id + w_label + w_msgs + w_tools + w_in + w_out + w_cost + 26)
    );

    for s in &report.sessions {
        let label_colored = if s.label == "subagent" {
            s.label.magenta().to_string()
        } else {
            s.label.cyan().to_string()
        };

        println!(
            "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}  {:>w4$}  {:>w5$}  {:>w6$}  {}",
            truncate(&s.id, w_id),
            label_colored,
            s.message_count,
            s.tool_calls,
            fmt_tokens(s.tokens_in),
            fmt_tokens(s.tokens_out),
            fmt_cost(s.cost_usd),
            s.last_activity.as_deref().unwrap_or("-").dimmed(),
            w0 = w_id,
            w1 = w_label,
            w2 = w_msgs,
            w3 = w_tools,
            w4 = w_in,
            w5 = w_out,
            w6 = w_cost,
        );
    }

    println!();
    print_totals(report);
}

pub fn print_totals(report: &AggregateReport) {
    let t = &report.totals;
    println!(
        "{}",
        "── Totals ──────────────────────────────────────────────────────".bold()
    );
    println!("  Sessions   : {}", report.sessions.len());
    println!("  Messages   : {}", t.messages);
    println!("  Tool calls : {}", t.tool_calls);
    println!("  Tokens     : {}", fmt_tokens(t.tokens));
    println!("  Total cost : {}", fmt_cost(t.cost_usd).green().bold());
    println!("  Updated    : {}", report.last_updated.dimmed());
}
