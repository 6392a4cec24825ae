use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Affect categories, ordered from lowest to highest intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    #[serde(alias = "upset")]
    Upset,
    #[serde(alias = "down")]
    Down,
    #[serde(alias = "neutral")]
    Neutral,
    #[serde(alias = "coping")]
    Coping,
    #[serde(alias = "elated")]
    Elated,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Upset,
        Mood::Down,
        Mood::Neutral,
        Mood::Coping,
        Mood::Elated,
    ];

    /// Fixed position on the 1-5 affect scale.
    pub fn rank(self) -> u8 {
        match self {
            Mood::Upset => 1,
            Mood::Down => 2,
            Mood::Neutral => 3,
            Mood::Coping => 4,
            Mood::Elated => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Upset => "UPSET",
            Mood::Down => "DOWN",
            Mood::Neutral => "NEUTRAL",
            Mood::Coping => "COPING",
            Mood::Elated => "ELATED",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AnalysisError::UnknownMood(trimmed.to_string()))
    }
}

/// One logged observation. `note` and `tag` belong to the caller and are
/// never read by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    /// Unix epoch milliseconds.
    pub logged_at: i64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub tag: String,
}

impl MoodEntry {
    pub fn new(mood: Mood, logged_at: i64) -> Self {
        Self {
            mood,
            logged_at,
            note: String::new(),
            tag: String::new(),
        }
    }
}

/// Plot coordinates for a scatter chart. `x` collapses to a single `0.0`
/// when every entry shares one timestamp; `y` always has one value per entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodMix {
    pub mood: Mood,
    pub count: usize,
    pub share: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mood_names_in_either_case() {
        assert_eq!("UPSET".parse::<Mood>().unwrap(), Mood::Upset);
        assert_eq!("coping".parse::<Mood>().unwrap(), Mood::Coping);
        assert_eq!(" Elated ".parse::<Mood>().unwrap(), Mood::Elated);
    }

    #[test]
    fn rejects_unknown_mood_names() {
        let err = "grumpy".parse::<Mood>().unwrap_err();
        assert_eq!(err, AnalysisError::UnknownMood("grumpy".to_string()));
    }

    #[test]
    fn serde_names_match_labels() {
        for mood in Mood::ALL {
            let json = serde_json::to_string(&mood).unwrap();
            assert_eq!(json, format!("\"{}\"", mood.label()));
            assert_eq!(serde_json::from_str::<Mood>(&json).unwrap(), mood);
        }
    }

    #[test]
    fn moods_sort_by_rank() {
        let mut moods = vec![Mood::Elated, Mood::Upset, Mood::Neutral];
        moods.sort();
        assert_eq!(moods, vec![Mood::Upset, Mood::Neutral, Mood::Elated]);
        assert_eq!(Mood::Down.to_string(), "DOWN");
    }
}
