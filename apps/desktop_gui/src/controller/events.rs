//! UI/backend events and error modeling for the portal shell.

use portal_core::{ControllerWarning, Operation};
use shared::{domain::NewSubmission, ErrorKind, PortalError, RequiredField};

#[derive(Debug)]
pub enum UiEvent {
    SubmissionProcessed(NewSubmission),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Storage,
    Corruption,
    Access,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Login,
    Submission,
    Navigation,
    Storage,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    field: Option<RequiredField>,
    message: String,
}

impl UiError {
    pub fn from_portal(context: UiErrorContext, err: &PortalError) -> Self {
        let category = match err.kind() {
            ErrorKind::Validation => UiErrorCategory::Validation,
            ErrorKind::StorageRead | ErrorKind::StorageWrite => UiErrorCategory::Storage,
            ErrorKind::DataCorruption => UiErrorCategory::Corruption,
            ErrorKind::AccessDenied => UiErrorCategory::Access,
            ErrorKind::Config => UiErrorCategory::Unknown,
        };
        let field = match err {
            PortalError::Validation { field } => Some(*field),
            _ => None,
        };
        Self {
            category,
            context,
            field,
            message: err.to_string(),
        }
    }

    pub fn from_warning(warning: &ControllerWarning) -> Self {
        let context = match warning.operation {
            Operation::LoadSubmissions => UiErrorContext::Storage,
            Operation::AddSubmission => UiErrorContext::Submission,
            Operation::Navigate => UiErrorContext::Navigation,
            Operation::RememberCredential
            | Operation::ReadCredential
            | Operation::ForgetCredential => UiErrorContext::Login,
        };
        Self::from_portal(context, &warning.error)
    }

    /// Stored data that had to be discarded outside the controller.
    pub fn corruption(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Corruption,
            context,
            field: None,
            message: message.into(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context,
            field: None,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn field(&self) -> Option<RequiredField> {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Catalog key for the banner text; `None` means the raw message is shown.
    pub fn message_key(&self) -> Option<&'static str> {
        match self.category {
            UiErrorCategory::Validation => Some("requiredField"),
            UiErrorCategory::Storage => Some("storageWarning"),
            UiErrorCategory::Corruption => Some("corruptDataWarning"),
            UiErrorCategory::Access => Some("accessDenied"),
            UiErrorCategory::Unknown => None,
        }
    }

    /// Banner text in the active language of `translate`.
    pub fn localized(&self, translate: impl Fn(&str) -> String) -> String {
        match (self.message_key(), self.field) {
            (Some(key), Some(field)) => {
                format!("{}: {}", translate(key), translate(field.label_key()))
            }
            (Some(key), None) => translate(key),
            (None, _) => self.message.clone(),
        }
    }
}
