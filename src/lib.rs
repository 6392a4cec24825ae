//! Mood trend analysis
//!
//! Turns an ordered log of mood observations into scatter plot coordinates
//! and a short written summary of how the mood has moved.

pub mod analysis;
pub mod error;
pub mod import;
pub mod models;
pub mod report;

pub use analysis::{
    classify, horizontal_positions, mood_for_rank, rank_of, scatter_series, summarize,
    vertical_position, Trend,
};
pub use error::{AnalysisError, Result};
pub use models::{Mood, MoodEntry, MoodMix, ScatterSeries};
