use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the lab building blocks.
///
/// Window and shader failures are fatal at startup; heightfield and asset
/// failures are returned to the caller instead of producing zeroed data.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("window initialization failed: {0}")]
    WindowInitFailed(String),

    #[error("{stage} shader failed to compile: {message}")]
    ShaderCompileFailed { stage: String, message: String },

    /// `line` is 1-based, 0 refers to the whole file.
    #[error("malformed heightfield (line {line}): {reason}")]
    MalformedHeightField { line: usize, reason: String },

    #[error("failed to load asset {path:?}")]
    AssetLoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LabError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        LabError::MalformedHeightField {
            line,
            reason: reason.into(),
        }
    }
}

pub type LabResult<T> = Result<T, LabError>;
