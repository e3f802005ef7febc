//! Session and navigation controller for the sector portal.
//!
//! [`SessionController`] is the single owner of session state: language,
//! theme, current view, signed-in user and the submission list. Views read
//! from it and call its operations; nothing else mutates the session.

use chrono::Local;
use shared::{
    domain::{
        Language, NewSubmission, Role, SectorSubmission, Session, Theme, UserState, View,
        SUBMITTED_AT_FORMAT,
    },
    i18n::{Catalog, Translator},
    PortalError, PortalResult, RequiredField,
};
use storage::KeyValueStore;
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod config;
pub mod credentials;
pub mod form;
pub mod submissions;

pub use config::{ControllerConfig, DashboardAccess};
pub use form::SubmissionDraft;
pub use submissions::SubmissionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadSubmissions,
    AddSubmission,
    Navigate,
    RememberCredential,
    ReadCredential,
    ForgetCredential,
}

/// A failure that did not stop the operation that produced it.
#[derive(Debug, Error)]
#[error("{operation:?}: {error}")]
pub struct ControllerWarning {
    pub operation: Operation,
    pub error: PortalError,
}

pub struct SessionController {
    session: Session,
    config: ControllerConfig,
    store: Box<dyn KeyValueStore>,
    submissions: SubmissionStore,
    translator: Box<dyn Translator>,
    warnings: Vec<ControllerWarning>,
}

impl SessionController {
    pub fn new(store: Box<dyn KeyValueStore>, config: ControllerConfig) -> Self {
        Self::with_translator(store, config, Box::new(Catalog))
    }

    pub fn with_translator(
        store: Box<dyn KeyValueStore>,
        config: ControllerConfig,
        translator: Box<dyn Translator>,
    ) -> Self {
        let mut controller = Self {
            session: Session::default(),
            config,
            store,
            submissions: SubmissionStore::new(),
            translator,
            warnings: Vec::new(),
        };
        controller.load_submissions();
        controller
    }

    /// Reads the durable submission list. Unreadable or malformed data is
    /// discarded in favour of an empty list and reported as a warning.
    fn load_submissions(&mut self) {
        match SubmissionStore::load(self.store.as_ref()) {
            Ok(loaded) => {
                info!(count = loaded.len(), "loaded submissions");
                self.submissions = loaded;
            }
            Err(err) => {
                self.submissions = SubmissionStore::new();
                self.warn(Operation::LoadSubmissions, err);
            }
        }
    }

    fn warn(&mut self, operation: Operation, error: PortalError) {
        warn!(?operation, error = %error, "non-fatal portal error");
        self.warnings.push(ControllerWarning { operation, error });
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.session.language
    }

    pub fn theme(&self) -> Theme {
        self.session.theme
    }

    pub fn current_view(&self) -> View {
        self.session.view
    }

    pub fn user(&self) -> UserState {
        self.session.user
    }

    pub fn submissions(&self) -> &[SectorSubmission] {
        self.submissions.as_slice()
    }

    pub fn set_language(&mut self, language: Language) {
        debug!(language = language.code(), "language changed");
        self.session.language = language;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.session.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.session.theme = self.session.theme.toggled();
        self.session.theme
    }

    /// Switches to `view` and returns the view actually shown, which differs
    /// only when a dashboard guard redirects to the login view.
    pub fn navigate(&mut self, view: View) -> View {
        let target = match (self.config.dashboard_access, view.required_role()) {
            (DashboardAccess::RequireRole, Some(required))
                if self.session.user.role() != Some(required) =>
            {
                self.warn(
                    Operation::Navigate,
                    PortalError::AccessDenied { view, required },
                );
                View::Login
            }
            _ => view,
        };
        debug!(from = ?self.session.view, to = ?target, "navigate");
        self.session.view = target;
        target
    }

    /// Signs in as `role` with any non-empty credential and opens the role's
    /// dashboard. With `remember`, the credential is kept in durable storage.
    pub fn login(&mut self, role: Role, credential: &str, remember: bool) -> PortalResult<View> {
        if credential.is_empty() {
            return Err(PortalError::validation(RequiredField::Credential));
        }
        if remember {
            if let Err(err) = credentials::remember(self.store.as_mut(), role, credential) {
                self.warn(Operation::RememberCredential, err);
            }
        }

        self.session.user = UserState::signed_in(role);
        info!(role = role.code(), "signed in");
        Ok(self.navigate(role.dashboard()))
    }

    pub fn logout(&mut self) {
        if let Some(role) = self.session.user.role() {
            info!(role = role.code(), "signed out");
        }
        self.session.user = UserState::anonymous();
        self.navigate(View::Home);
    }

    /// Remembered credential for `role`, or an empty string.
    pub fn saved_credential(&mut self, role: Role) -> String {
        match credentials::saved(self.store.as_ref(), role) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(err) => {
                self.warn(Operation::ReadCredential, err);
                String::new()
            }
        }
    }

    pub fn forget_credential(&mut self, role: Role) {
        if let Err(err) = credentials::forget(self.store.as_mut(), role) {
            self.warn(Operation::ForgetCredential, err);
        }
    }

    /// Appends a submission stamped with a fresh id and the current local
    /// time, then mirrors the whole list to durable storage. The append is
    /// kept even when the write fails.
    pub fn add_submission(&mut self, new: NewSubmission) -> SectorSubmission {
        let submitted_at = Local::now().format(SUBMITTED_AT_FORMAT).to_string();
        let stored = self.submissions.append(new, submitted_at).clone();
        info!(
            id = %stored.id,
            sector = %stored.sector_name,
            total = self.submissions.len(),
            "submission added"
        );

        if let Err(err) = self.submissions.persist(self.store.as_mut()) {
            self.warn(Operation::AddSubmission, err);
        }
        stored
    }

    /// Localized text for `key` in the active language; the key itself when
    /// the catalog has no entry.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translator.translate(self.session.language, key)
    }

    pub fn warnings(&self) -> &[ControllerWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<ControllerWarning> {
        std::mem::take(&mut self.warnings)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
