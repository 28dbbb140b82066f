use crate::model::ContactId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("Invalid contact: {0}")]
    Validation(String),

    #[error("A contact with ID {0} already exists")]
    DuplicateId(ContactId),

    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reading or writing the backing document of a file store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize contacts: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CrmError>;
