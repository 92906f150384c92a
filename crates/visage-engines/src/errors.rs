use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read catalog file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("no engine with UUID '{uuid}' in the catalog")]
    UnknownEngine { uuid: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SettingsError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SettingsError::ConfigRead { .. } => ExitCode::from(2),
            SettingsError::ConfigParse { .. } => ExitCode::from(2),
            SettingsError::UnknownEngine { .. } => ExitCode::from(4),
            _ => ExitCode::from(1),
        }
    }

    pub fn human_message(&self) -> String {
        self.to_string()
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
