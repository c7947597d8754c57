use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AudioError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Unsupported or unreadable file {path:?}: {reason}")]
    UnsupportedOrUnreadableFile { path: PathBuf, reason: String },

    #[error("Audio output device error: {0}")]
    Device(String),

    #[error("Stream error: {0}")]
    Stream(String),
}

impl AudioError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AudioError::UnsupportedOrUnreadableFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
