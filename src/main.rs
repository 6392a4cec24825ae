use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mood_trend::{analysis, import, report};

#[derive(Parser)]
#[command(name = "mood-trend")]
#[command(about = "Scatter coordinates and trend summaries for mood logs", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe the trend in a mood log
    Summarize {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Print scatter plot coordinates
    Plot {
        #[arg(long)]
        csv: PathBuf,
        /// Emit the coordinates as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Write a sample week of mood entries
    Seed {
        #[arg(long, default_value = "moods.csv")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    match cli.command {
        Commands::Summarize { csv } => {
            let entries = import::load_csv(&csv)?;
            println!("{}", analysis::summarize(&entries));
        }
        Commands::Plot { csv, json } => {
            let entries = import::load_csv(&csv)?;
            let series = analysis::scatter_series(&entries)
                .with_context(|| format!("cannot plot {}", csv.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                for (x, y) in series.x.iter().zip(series.y.iter()) {
                    println!("{x},{y}");
                }
            }
        }
        Commands::Report { csv, out } => {
            let entries = import::load_csv(&csv)?;
            let label = csv.display().to_string();
            let report = report::build_report(Some(&label), &entries);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(entries = entries.len(), "report written");
            println!("Report written to {}.", out.display());
        }
        Commands::Seed { out } => {
            let start = Utc::now().timestamp_millis() - 7 * 24 * 60 * 60 * 1000;
            let entries = import::sample_week(start);
            let file = std::fs::File::create(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            import::write_entries(file, &entries)?;
            println!("Wrote {} sample entries to {}.", entries.len(), out.display());
        }
    }

    Ok(())
}
