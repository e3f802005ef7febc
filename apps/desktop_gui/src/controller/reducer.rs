//! Reducer-like state transitions for the portal shell.
//!
//! Views emit [`UiAction`]s; [`reduce`] applies them to [`ShellState`] on the
//! UI thread and returns the backend command to queue, if any. Keeping this
//! free of egui makes the shell's behaviour testable without a window.

use std::path::PathBuf;

use portal_core::{SessionController, SubmissionDraft};
use shared::domain::{Language, Role, View};
use tracing::debug;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

/// Input buffers of the login view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub tab: Role,
    pub password: String,
    pub save_password: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            tab: Role::Manager,
            password: String::new(),
            save_password: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Closed,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct SectorForm {
    pub phase: FormPhase,
    pub draft: SubmissionDraft,
}

impl SectorForm {
    pub fn accepts_input(&self) -> bool {
        self.phase == FormPhase::Editing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileField {
    Document,
    Longitude,
    Latitude,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(View),
    SetLanguage(Language),
    ToggleTheme,
    SelectLoginTab(Role),
    SubmitLogin,
    ForgetSavedPassword,
    Logout,
    OpenSectorForm,
    CloseSectorForm,
    FilePicked { field: FileField, path: PathBuf },
    SubmitSectorForm,
    DismissBanner,
}

pub struct ShellState {
    pub controller: SessionController,
    pub login: LoginForm,
    pub sector_form: SectorForm,
    pub banner: Option<StatusBanner>,
}

impl ShellState {
    pub fn new(controller: SessionController) -> Self {
        let mut state = Self {
            controller,
            login: LoginForm::default(),
            sector_form: SectorForm::default(),
            banner: None,
        };
        state.surface_warnings();
        state
    }

    pub fn show_error(&mut self, err: &UiError) {
        tracing::warn!(context = ?err.context(), category = ?err.category(), "{}", err.message());
        let message = err.localized(|key| self.controller.t(key).to_string());
        self.banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Error,
            message,
        });
    }

    fn show_success(&mut self, key: &str) {
        self.banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Success,
            message: self.controller.t(key).to_string(),
        });
    }

    /// Non-fatal problem: the operation went ahead but the user should know.
    pub fn show_warning(&mut self, err: &UiError) {
        tracing::warn!(context = ?err.context(), category = ?err.category(), "{}", err.message());
        let message = err.localized(|key| self.controller.t(key).to_string());
        self.banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Warning,
            message,
        });
    }

    /// Moves controller warnings into the banner; the most recent one wins.
    fn surface_warnings(&mut self) {
        if let Some(last) = self.controller.take_warnings().pop() {
            self.show_warning(&UiError::from_warning(&last));
        }
    }

    /// Resets view-local buffers when `view` becomes visible.
    fn enter_view(&mut self, view: View) {
        if self.sector_form.phase != FormPhase::Submitting {
            self.sector_form = SectorForm::default();
        }
        if view == View::Login {
            self.prefill_login(self.login.tab);
        }
    }

    fn prefill_login(&mut self, tab: Role) {
        self.login = LoginForm {
            tab,
            password: self.controller.saved_credential(tab),
            save_password: self.login.save_password,
        };
    }

    fn navigate(&mut self, view: View) {
        let before = self.controller.current_view();
        let shown = self.controller.navigate(view);
        if shown != before {
            self.enter_view(shown);
        }
    }
}

pub fn reduce(state: &mut ShellState, action: UiAction) -> Option<BackendCommand> {
    debug!(?action, "ui action");
    let mut command = None;

    match action {
        UiAction::Navigate(view) => state.navigate(view),
        UiAction::SetLanguage(language) => state.controller.set_language(language),
        UiAction::ToggleTheme => {
            state.controller.toggle_theme();
        }
        UiAction::SelectLoginTab(role) => state.prefill_login(role),
        UiAction::SubmitLogin => {
            let before = state.controller.current_view();
            let LoginForm {
                tab,
                password,
                save_password,
            } = state.login.clone();
            match state.controller.login(tab, &password, save_password) {
                Ok(shown) => {
                    state.login = LoginForm::default();
                    state.banner = None;
                    if shown != before {
                        state.enter_view(shown);
                    }
                }
                Err(err) => state.show_error(&UiError::from_portal(UiErrorContext::Login, &err)),
            }
        }
        UiAction::ForgetSavedPassword => {
            state.controller.forget_credential(state.login.tab);
            state.login.password.clear();
        }
        UiAction::Logout => {
            state.controller.logout();
            state.enter_view(View::Home);
        }
        UiAction::OpenSectorForm => {
            if state.sector_form.phase == FormPhase::Closed {
                state.sector_form.phase = FormPhase::Editing;
            }
        }
        UiAction::CloseSectorForm => {
            if state.sector_form.accepts_input() {
                state.sector_form = SectorForm::default();
            }
        }
        UiAction::FilePicked { field, path } => {
            if state.sector_form.accepts_input() {
                let draft = &mut state.sector_form.draft;
                let slot = match field {
                    FileField::Document => &mut draft.document,
                    FileField::Longitude => &mut draft.longitude,
                    FileField::Latitude => &mut draft.latitude,
                };
                *slot = Some(path);
            }
        }
        UiAction::SubmitSectorForm => {
            if state.sector_form.accepts_input() {
                match state.sector_form.draft.validate() {
                    Ok(submission) => {
                        state.sector_form.phase = FormPhase::Submitting;
                        command = Some(BackendCommand::ProcessSubmission { submission });
                    }
                    Err(err) => {
                        state.show_error(&UiError::from_portal(UiErrorContext::Submission, &err))
                    }
                }
            }
        }
        UiAction::DismissBanner => state.banner = None,
    }

    state.surface_warnings();
    command
}

/// Applies an event coming back from the backend worker.
pub fn apply_event(state: &mut ShellState, event: UiEvent) {
    match event {
        UiEvent::SubmissionProcessed(submission) => {
            state.controller.add_submission(submission);
            state.sector_form = SectorForm::default();
            state.show_success("success");
        }
        UiEvent::Error(err) => {
            if state.sector_form.phase == FormPhase::Submitting {
                state.sector_form.phase = FormPhase::Editing;
            }
            state.show_error(&err);
        }
    }
    state.surface_warnings();
}

/// Returns a submitting form to editing when its command never reached the
/// worker.
pub fn command_failed(state: &mut ShellState, err: &UiError) {
    apply_event(state, UiEvent::Error(err.clone()));
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
