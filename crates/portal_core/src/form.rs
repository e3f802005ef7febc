use std::path::{Path, PathBuf};

use shared::{domain::NewSubmission, PortalError, PortalResult, RequiredField};

/// Sector submission form as filled in by the user. Files are only ever
/// inspected for their display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub sector_name: String,
    pub document: Option<PathBuf>,
    pub longitude: Option<PathBuf>,
    pub latitude: Option<PathBuf>,
}

impl SubmissionDraft {
    /// First required field that is still empty, in form order.
    pub fn missing_field(&self) -> Option<RequiredField> {
        if self.sector_name.is_empty() {
            return Some(RequiredField::SectorName);
        }
        [
            (&self.document, RequiredField::Document),
            (&self.longitude, RequiredField::LongitudeFile),
            (&self.latitude, RequiredField::LatitudeFile),
        ]
        .into_iter()
        .find(|(path, _)| path.as_deref().and_then(display_name).is_none())
        .map(|(_, field)| field)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn validate(&self) -> PortalResult<NewSubmission> {
        if let Some(field) = self.missing_field() {
            return Err(PortalError::validation(field));
        }
        let name_of = |path: &Option<PathBuf>| {
            path.as_deref()
                .and_then(display_name)
                .unwrap_or_default()
        };
        Ok(NewSubmission {
            sector_name: self.sector_name.clone(),
            document_name: name_of(&self.document),
            longitude_file_name: name_of(&self.longitude),
            latitude_file_name: name_of(&self.latitude),
        })
    }
}

/// File name component of `path`, if it has a non-empty one.
pub fn display_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
