use std::fmt::Write;

use chrono::DateTime;

use crate::analysis;
use crate::error::AnalysisError;
use crate::models::MoodEntry;

pub fn format_logged_at(logged_at: i64) -> String {
    match DateTime::from_timestamp_millis(logged_at) {
        Some(at) => at.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => logged_at.to_string(),
    }
}

pub fn build_report(source: Option<&str>, entries: &[MoodEntry]) -> String {
    let mut output = String::new();
    let source_label = source.unwrap_or("mood log");

    let _ = writeln!(output, "# Mood Trend Report");
    match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => {
            let _ = writeln!(
                output,
                "Generated for {} ({} entries from {} to {})",
                source_label,
                entries.len(),
                format_logged_at(first.logged_at),
                format_logged_at(last.logged_at)
            );
        }
        _ => {
            let _ = writeln!(output, "Generated for {} (no entries)", source_label);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Summary");
    let _ = writeln!(output, "{}", analysis::summarize(entries));

    let _ = writeln!(output);
    let _ = writeln!(output, "## Mood Mix");

    let mix = analysis::mood_mix(entries);
    if mix.is_empty() {
        let _ = writeln!(output, "No mood entries recorded.");
    } else {
        for item in mix.iter() {
            let _ = writeln!(
                output,
                "- {}: {} {} ({:.0}%)",
                item.mood,
                item.count,
                if item.count == 1 { "entry" } else { "entries" },
                item.share * 100.0
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Scatter Points");

    match analysis::scatter_series(entries) {
        Ok(series) => {
            for (x, y) in series.x.iter().zip(series.y.iter()) {
                let _ = writeln!(output, "- ({:.3}, {:.0})", x, y);
            }
        }
        Err(AnalysisError::InvalidArgument(_)) => {
            let _ = writeln!(output, "No mood entries recorded.");
        }
        Err(err) => {
            let _ = writeln!(output, "Scatter points unavailable: {}", err);
        }
    }

    let mut recent_entries = entries.to_vec();
    recent_entries.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Notes");

    if recent_entries.is_empty() {
        let _ = writeln!(output, "No mood entries recorded.");
    } else {
        for entry in recent_entries.iter().take(5) {
            let _ = writeln!(
                output,
                "- {} ({}) on {}: {}",
                entry.mood,
                entry.tag,
                format_logged_at(entry.logged_at),
                entry.note
            );
        }
    }

    output
}
