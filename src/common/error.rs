//! Error types shared by the driver, the surfaces and the settings loader.

use thiserror::Error;

use crate::common::enums::Algorithm;

#[derive(Error, Debug)]
pub enum VisualizerError {
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Settings error: {source}")]
    Settings {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid setting `{field}`: {message}")]
    InvalidSetting { field: &'static str, message: String },

    #[error("A sort is already running; the array cannot be replaced")]
    SortInProgress,

    #[error("Sort worker for {algorithm} panicked")]
    WorkerPanicked { algorithm: Algorithm },

    #[error("Logging error: {message}")]
    Logging { message: String },
}

impl VisualizerError {
    pub fn invalid_setting(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
