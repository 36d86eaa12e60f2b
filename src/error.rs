use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{field} is required!")]
    BlankField { field: String },

    #[error("Contact {name} already exists!")]
    DuplicateName { name: String },

    #[error("Contact not found: {name}")]
    NotFound { name: String },

    #[error("Please select a contact to {action}!")]
    NothingSelected { action: String },

    #[error("Error loading contacts file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error loading contacts file {}: record {index} has a blank name", .path.display())]
    BlankRecordName { path: PathBuf, index: usize },

    #[error("Error reading contacts file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save contacts to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl ContactError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContactError::BlankField { .. }
                | ContactError::DuplicateName { .. }
                | ContactError::NotFound { .. }
                | ContactError::NothingSelected { .. }
        )
    }
}

pub type ContactResult<T> = Result<T, ContactError>;
