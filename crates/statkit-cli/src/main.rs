use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
use commands::{collect, list};

#[derive(Parser)]
#[command(
    name = "statkit",
    version = "0.1.0",
    author,
    about = "Aggregate usage statistics from agent session transcripts",
    long_about = r#"statkit reads OpenClaw session transcripts (JSONL, one file per session),
extracts message/tool/token/cost statistics from each, and produces one
consolidated report.

Quick start:
  statkit                           # collect with default paths, write session-stats.json
  statkit collect --out stats.json  # choose the report destination
  statkit list                      # per-session table, nothing written
  statkit list --format json        # same data as JSON"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate all transcripts and write the consolidated report
    Collect(collect::CollectArgs),

    /// Show per-session statistics without writing a report
    List(list::ListArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Collect(args)) => collect::run(args),
        Some(Commands::List(args)) => list::run(args),
        // Bare invocation collects with all defaults.
        None => collect::run(collect::CollectArgs::default()),
    }
}
