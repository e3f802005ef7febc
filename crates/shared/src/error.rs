use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Role, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    DataCorruption,
    StorageRead,
    StorageWrite,
    AccessDenied,
    Config,
}

/// Form fields that must be non-empty before login or submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Credential,
    SectorName,
    Document,
    LongitudeFile,
    LatitudeFile,
}

impl RequiredField {
    /// Translation key of the field label.
    pub fn label_key(self) -> &'static str {
        match self {
            RequiredField::Credential => "password",
            RequiredField::SectorName => "sectorName",
            RequiredField::Document => "govLegality",
            RequiredField::LongitudeFile => "longitude",
            RequiredField::LatitudeFile => "latitude",
        }
    }
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("required field is empty: {field:?}")]
    Validation { field: RequiredField },
    #[error("stored data under '{key}' is malformed: {message}")]
    DataCorruption { key: String, message: String },
    #[error("failed to read '{key}' from durable storage: {message}")]
    StorageRead { key: String, message: String },
    #[error("failed to write '{key}' to durable storage: {message}")]
    StorageWrite { key: String, message: String },
    #[error("{view:?} requires a signed-in {required:?}")]
    AccessDenied { view: View, required: Role },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PortalError {
    pub fn validation(field: RequiredField) -> Self {
        Self::Validation { field }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PortalError::Validation { .. } => ErrorKind::Validation,
            PortalError::DataCorruption { .. } => ErrorKind::DataCorruption,
            PortalError::StorageRead { .. } => ErrorKind::StorageRead,
            PortalError::StorageWrite { .. } => ErrorKind::StorageWrite,
            PortalError::AccessDenied { .. } => ErrorKind::AccessDenied,
            PortalError::Config(_) => ErrorKind::Config,
        }
    }

    /// Persistence problems leave in-memory state authoritative.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::DataCorruption | ErrorKind::StorageRead | ErrorKind::StorageWrite
        )
    }
}

pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_persistence_errors() {
        let write = PortalError::StorageWrite {
            key: "eims_submissions".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(write.kind(), ErrorKind::StorageWrite);
        assert!(write.is_persistence());

        let validation = PortalError::validation(RequiredField::Credential);
        assert_eq!(validation.kind(), ErrorKind::Validation);
        assert!(!validation.is_persistence());
    }

    #[test]
    fn error_messages_name_the_key() {
        let err = PortalError::DataCorruption {
            key: "eims_submissions".to_string(),
            message: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("eims_submissions"));
    }
}
