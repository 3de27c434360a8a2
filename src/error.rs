// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pipeline error types.
//!
//! Every error is fatal for a run: stages propagate with `?` and the dataset
//! builder aborts before anything is written.

/// Errors raised by the ETL stages.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to load {path}: {message}")]
    Load { path: String, message: String },

    #[error("Field mapping error: {0}")]
    Mapping(String),

    #[error("Invalid timestamp {value:?}: {message}")]
    TimestampParse { value: String, message: String },

    #[error("Failed to write dataset: {0}")]
    Export(String),
}

impl PipelineError {
    /// Short, stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Load { .. } => "load",
            PipelineError::Mapping(_) => "mapping",
            PipelineError::TimestampParse { .. } => "timestamp_parse",
            PipelineError::Export(_) => "export",
        }
    }

    pub(crate) fn load(path: impl AsRef<std::path::Path>, message: impl ToString) -> Self {
        PipelineError::Load {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn timestamp(value: &str, message: impl ToString) -> Self {
        PipelineError::TimestampParse {
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::Export(err.to_string())
    }
}

/// Result type alias for pipeline stages
pub type Result<T> = std::result::Result<T, PipelineError>;
