use std::fmt;

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::models::{Mood, MoodEntry, MoodMix, ScatterSeries};

/// Fewer entries than this and no trend is reported.
pub const MIN_ENTRIES: usize = 5;
/// Distance from the mean rank beyond which an entry is a candidate outlier.
pub const OUTLIER_DEVIATION: f64 = 2.0;
/// A candidate outlier this close to any regular entry is not reported.
pub const OUTLIER_CLOSENESS: f64 = 1.0;

const SPARSE_MESSAGE: &str = "It's hard to glean much from just a few mood entries. Log more throughout the coming week to learn more about yourself!";
const IMPROVING_MESSAGE: &str = "Looks like your mood has been improving throughout the week! Take stock of what made you feel better, and stay smiling :)";
const DECLINING_MESSAGE: &str = "Your mood has been on a bit of a downturn this week. It's a good time to stay mindful of the things you enjoy and the things you don't.";
const STABLE_MESSAGE: &str = "It looks like your mood has been pretty stable. Do you want that to change, or are you happy with how things are going right now?";

/// Outcome of reading a mood log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Sparse,
    Outlier(Mood),
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn message(&self) -> String {
        match self {
            Trend::Sparse => SPARSE_MESSAGE.to_string(),
            Trend::Outlier(mood) => format!(
                "Seems like you felt {mood} on a particular day this week. What happened that made you feel differently from the rest of the week?"
            ),
            Trend::Improving => IMPROVING_MESSAGE.to_string(),
            Trend::Declining => DECLINING_MESSAGE.to_string(),
            Trend::Stable => STABLE_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

pub fn rank_of(mood: Mood) -> u8 {
    mood.rank()
}

/// Inverse of [`rank_of`]. Anything other than an exact rank maps to
/// `Mood::Neutral` instead of failing.
pub fn mood_for_rank(rank: f64) -> Mood {
    Mood::ALL
        .into_iter()
        .find(|mood| f64::from(mood.rank()) == rank)
        .unwrap_or(Mood::Neutral)
}

pub fn vertical_position(entry: &MoodEntry) -> f64 {
    f64::from(rank_of(entry.mood))
}

/// Positions each entry on `[0.0, 1.0]` by its share of the span between the
/// first and last `logged_at`. Entries are taken in the order given.
///
/// When the span is zero the result is the single value `[0.0]`, not one
/// value per entry.
pub fn horizontal_positions(entries: &[MoodEntry]) -> Result<Vec<f64>> {
    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        return Err(AnalysisError::InvalidArgument(
            "cannot position an empty mood log".to_string(),
        ));
    };

    // i128 so spans across the whole i64 range cannot overflow
    let earliest = i128::from(first.logged_at);
    let span = i128::from(last.logged_at) - earliest;
    if span == 0 {
        return Ok(vec![0.0]);
    }

    Ok(entries
        .iter()
        .map(|entry| (i128::from(entry.logged_at) - earliest) as f64 / span as f64)
        .collect())
}

pub fn scatter_series(entries: &[MoodEntry]) -> Result<ScatterSeries> {
    let x = horizontal_positions(entries)?;
    let y = entries.iter().map(vertical_position).collect();
    Ok(ScatterSeries { x, y })
}

pub fn classify(entries: &[MoodEntry]) -> Trend {
    if entries.len() < MIN_ENTRIES {
        return Trend::Sparse;
    }

    let ranks: Vec<f64> = entries.iter().map(vertical_position).collect();
    let outlier = find_single_outlier(&ranks);
    let (first_half, second_half) = half_means(&ranks);
    debug!(
        entries = entries.len(),
        first_half,
        second_half,
        outlier = ?outlier,
        "classified mood log"
    );

    match outlier {
        Some(mood) => Trend::Outlier(mood),
        None if first_half < second_half => Trend::Improving,
        None if first_half > second_half => Trend::Declining,
        None => Trend::Stable,
    }
}

pub fn summarize(entries: &[MoodEntry]) -> String {
    classify(entries).message()
}

/// Count and share of each mood present, most frequent first.
pub fn mood_mix(entries: &[MoodEntry]) -> Vec<MoodMix> {
    let total = entries.len();
    let mut mix: Vec<MoodMix> = Mood::ALL
        .into_iter()
        .filter_map(|mood| {
            let count = entries.iter().filter(|entry| entry.mood == mood).count();
            (count > 0).then(|| MoodMix {
                mood,
                count,
                share: count as f64 / total as f64,
            })
        })
        .collect();

    mix.sort_by(|a, b| b.count.cmp(&a.count).then(a.mood.cmp(&b.mood)));
    mix
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

// Both halves include the middle element.
fn half_means(ranks: &[f64]) -> (f64, f64) {
    let mid = ranks.len() / 2;
    (mean(&ranks[..=mid]), mean(&ranks[mid..]))
}

fn find_single_outlier(ranks: &[f64]) -> Option<Mood> {
    let average = mean(ranks);
    let (outliers, regulars): (Vec<f64>, Vec<f64>) = ranks
        .iter()
        .copied()
        .partition(|&rank| (rank - average).abs() > OUTLIER_DEVIATION);

    let &[outlier] = outliers.as_slice() else {
        return None;
    };

    let near_regular = regulars
        .iter()
        .any(|&rank| (outlier - rank).abs() <= OUTLIER_CLOSENESS);
    if near_regular {
        None
    } else {
        Some(mood_for_rank(outlier))
    }
}
