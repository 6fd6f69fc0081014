use std::path::Path;

use thiserror::Error;

use crate::creational::prototype::{DocumentId, UserId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaygroundError {
    #[error("Theme is incomplete: '{field}' was never set")]
    IncompleteTheme { field: &'static str },

    #[error("Unknown owner: no user with id {0}")]
    UnknownOwner(UserId),

    #[error("User id {0} is taken or belonged to a removed user")]
    UserIdTaken(UserId),

    #[error("Unknown document: {0}")]
    UnknownDocument(DocumentId),

    #[error("Unknown vehicle kind '{0}' (expected car, truck or bus)")]
    UnknownVehicleKind(String),

    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("Failed to read config {path}: {message}")]
    ConfigRead { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),
}

impl PlaygroundError {
    pub fn config_read(path: &Path, err: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PlaygroundError {
    fn from(err: toml::de::Error) -> Self {
        PlaygroundError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
