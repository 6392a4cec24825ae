use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::models::{Mood, MoodEntry};

/// Reads a `mood,logged_at,note,tag` CSV. Rows are kept in file order.
pub fn read_entries<R: Read>(reader: R) -> anyhow::Result<Vec<MoodEntry>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut entries: Vec<MoodEntry> = Vec::new();

    for (index, result) in reader.deserialize::<MoodEntry>().enumerate() {
        let entry = result.with_context(|| format!("invalid mood entry on row {}", index + 1))?;

        if let Some(previous) = entries.last() {
            if entry.logged_at < previous.logged_at {
                warn!(
                    row = index + 1,
                    logged_at = entry.logged_at,
                    previous = previous.logged_at,
                    "mood entries are out of order; positions will be skewed"
                );
            }
        }

        entries.push(entry);
    }

    debug!(count = entries.len(), "read mood entries");
    Ok(entries)
}

pub fn load_csv(csv_path: &Path) -> anyhow::Result<Vec<MoodEntry>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    read_entries(file)
}

pub fn write_entries<W: Write>(writer: W, entries: &[MoodEntry]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

/// A week of entries logged twice a day, starting at `start` (epoch millis).
pub fn sample_week(start: i64) -> Vec<MoodEntry> {
    const HOUR: i64 = 60 * 60 * 1000;

    let samples = [
        (Mood::Down, 8, "Slept badly, long commute", "WORK"),
        (Mood::Neutral, 20, "Quiet dinner at home", "EATING"),
        (Mood::Down, 32, "Deadline moved up", "WORK"),
        (Mood::Neutral, 44, "Called my sister", "SOCIAL"),
        (Mood::Coping, 56, "Morning run helped", "EXERCISE"),
        (Mood::Neutral, 68, "Cooked something new", "EATING"),
        (Mood::Coping, 80, "Shipped the release", "WORK"),
        (Mood::Coping, 92, "Board games with friends", "SOCIAL"),
        (Mood::Elated, 104, "Hike by the lake", "EXERCISE"),
        (Mood::Coping, 116, "Long brunch", "EATING"),
        (Mood::Elated, 128, "Concert downtown", "SOCIAL"),
        (Mood::Coping, 140, "Slow Sunday", "REST"),
    ];

    samples
        .into_iter()
        .map(|(mood, hours, note, tag)| MoodEntry {
            mood,
            logged_at: start + hours * HOUR,
            note: note.to_string(),
            tag: tag.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_file_order() {
        let csv = "mood,logged_at,note,tag\n\
                   ELATED,1,Note,EATING\n\
                   upset,2,Rough day,WORK\n\
                   COPING,3,,\n";
        let entries = read_entries(csv.as_bytes()).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].mood, Mood::Elated);
        assert_eq!(entries[1].mood, Mood::Upset);
        assert_eq!(entries[1].note, "Rough day");
        assert_eq!(entries[2].logged_at, 3);
        assert_eq!(entries[2].tag, "");
    }

    #[test]
    fn keeps_out_of_order_rows() {
        let csv = "mood,logged_at,note,tag\nDOWN,9,a,b\nDOWN,4,c,d\n";
        let entries = read_entries(csv.as_bytes()).unwrap();
        let stamps: Vec<i64> = entries.iter().map(|e| e.logged_at).collect();
        assert_eq!(stamps, vec![9, 4]);
    }

    #[test]
    fn rejects_unknown_moods() {
        let csv = "mood,logged_at,note,tag\nGRUMPY,1,Note,EATING\n";
        let err = read_entries(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn written_entries_read_back() {
        let entries = sample_week(0);
        let mut buffer = Vec::new();
        write_entries(&mut buffer, &entries).unwrap();

        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.starts_with("mood,logged_at,note,tag"));
        assert_eq!(read_entries(buffer.as_slice()).unwrap(), entries);
    }

    #[test]
    fn sample_week_is_chronological() {
        let entries = sample_week(1_000);
        assert_eq!(entries.len(), 12);
        assert!(entries.windows(2).all(|pair| pair[0].logged_at < pair[1].logged_at));
        assert_eq!(entries[0].logged_at, 1_000 + 8 * 60 * 60 * 1000);
    }
}
