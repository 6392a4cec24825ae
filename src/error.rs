//! Error types for mood trend analysis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
