pub mod domain;
pub mod error;
pub mod i18n;

pub use domain::{
    Language, NewSubmission, Role, SectorSubmission, Session, SubmissionId, Theme, UserState,
    View,
};
pub use error::{ErrorKind, PortalError, PortalResult, RequiredField};
pub use i18n::{Catalog, Translator};
