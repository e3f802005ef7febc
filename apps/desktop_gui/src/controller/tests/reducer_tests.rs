use portal_core::{ControllerConfig, DashboardAccess};
use shared::domain::{NewSubmission, Theme};
use storage::{KeyValueStore, MemoryStore, SUBMISSIONS_KEY};

use super::*;

fn shell() -> ShellState {
    shell_with(MemoryStore::new(), ControllerConfig::default())
}

fn shell_with(store: MemoryStore, config: ControllerConfig) -> ShellState {
    ShellState::new(SessionController::new(Box::new(store), config))
}

fn fill_form(state: &mut ShellState) {
    state.sector_form.draft.sector_name = "Water Utility".to_string();
    for (field, path) in [
        (FileField::Document, "/tmp/permit.pdf"),
        (FileField::Longitude, "/tmp/lng.csv"),
        (FileField::Latitude, "/tmp/lat.csv"),
    ] {
        reduce(
            state,
            UiAction::FilePicked {
                field,
                path: PathBuf::from(path),
            },
        );
    }
}

#[test]
fn navbar_actions_update_session() {
    let mut state = shell();
    assert_eq!(reduce(&mut state, UiAction::Navigate(View::About)), None);
    reduce(&mut state, UiAction::SetLanguage(Language::Om));
    reduce(&mut state, UiAction::ToggleTheme);

    assert_eq!(state.controller.current_view(), View::About);
    assert_eq!(state.controller.language(), Language::Om);
    assert_eq!(state.controller.theme(), Theme::Dark);
}

#[test]
fn entering_login_prefills_remembered_password_for_the_tab() {
    let store = MemoryStore::new().with_entry("sector_pass", "remembered");
    let mut state = shell_with(store, ControllerConfig::default());

    reduce(&mut state, UiAction::Navigate(View::Login));
    assert_eq!(state.login.tab, Role::Manager);
    assert_eq!(state.login.password, "");

    reduce(&mut state, UiAction::SelectLoginTab(Role::Sector));
    assert_eq!(state.login.password, "remembered");

    reduce(&mut state, UiAction::ForgetSavedPassword);
    assert_eq!(state.login.password, "");
    assert_eq!(state.controller.saved_credential(Role::Sector), "");
}

#[test]
fn save_password_choice_survives_tab_switch() {
    let mut state = shell();
    reduce(&mut state, UiAction::Navigate(View::Login));
    state.login.save_password = true;

    reduce(&mut state, UiAction::SelectLoginTab(Role::Sector));
    assert!(state.login.save_password);
    reduce(&mut state, UiAction::SelectLoginTab(Role::Manager));
    assert!(state.login.save_password);
}

#[test]
fn empty_password_shows_validation_banner() {
    let mut state = shell();
    reduce(&mut state, UiAction::Navigate(View::Login));
    reduce(&mut state, UiAction::SubmitLogin);

    let banner = state.banner.clone().expect("banner");
    assert_eq!(banner.severity, StatusBannerSeverity::Error);
    assert!(banner.message.contains("Password"), "{}", banner.message);
    assert_eq!(state.controller.current_view(), View::Login);
    assert!(!state.controller.user().is_authenticated());
}

#[test]
fn successful_login_opens_dashboard_and_clears_buffers() {
    let mut state = shell();
    reduce(&mut state, UiAction::Navigate(View::Login));
    reduce(&mut state, UiAction::SelectLoginTab(Role::Sector));
    state.login.password = "pw".to_string();
    state.login.save_password = true;

    reduce(&mut state, UiAction::SubmitLogin);
    assert_eq!(state.controller.current_view(), View::SectorDashboard);
    assert_eq!(state.login, LoginForm::default());
    assert_eq!(state.controller.saved_credential(Role::Sector), "pw");

    reduce(&mut state, UiAction::Logout);
    assert_eq!(state.controller.current_view(), View::Home);
    assert!(!state.controller.user().is_authenticated());
}

#[test]
fn incomplete_form_is_not_sent_to_the_worker() {
    let mut state = shell();
    reduce(&mut state, UiAction::Navigate(View::SectorDashboard));
    reduce(&mut state, UiAction::OpenSectorForm);
    state.sector_form.draft.sector_name = "Roads".to_string();

    assert_eq!(reduce(&mut state, UiAction::SubmitSectorForm), None);
    assert_eq!(state.sector_form.phase, FormPhase::Editing);
    let banner = state.banner.clone().expect("banner");
    assert_eq!(banner.severity, StatusBannerSeverity::Error);
}

#[test]
fn submission_lifecycle_allows_one_in_flight() {
    let mut state = shell();
    reduce(&mut state, UiAction::Navigate(View::SectorDashboard));
    reduce(&mut state, UiAction::OpenSectorForm);
    fill_form(&mut state);

    let command = reduce(&mut state, UiAction::SubmitSectorForm).expect("command");
    let BackendCommand::ProcessSubmission { submission } = command else {
        panic!("unexpected command");
    };
    assert_eq!(submission.document_name, "permit.pdf");
    assert_eq!(state.sector_form.phase, FormPhase::Submitting);

    assert_eq!(reduce(&mut state, UiAction::SubmitSectorForm), None);
    reduce(&mut state, UiAction::CloseSectorForm);
    assert_eq!(state.sector_form.phase, FormPhase::Submitting);

    apply_event(&mut state, UiEvent::SubmissionProcessed(submission));
    assert_eq!(state.sector_form.phase, FormPhase::Closed);
    assert_eq!(state.controller.submissions().len(), 1);
    assert_eq!(state.controller.submissions()[0].sector_name, "Water Utility");
    let banner = state.banner.clone().expect("banner");
    assert_eq!(banner.severity, StatusBannerSeverity::Success);
}

#[test]
fn navigating_away_keeps_in_flight_submission() {
    let mut state = shell();
    reduce(&mut state, UiAction::Navigate(View::SectorDashboard));
    reduce(&mut state, UiAction::OpenSectorForm);
    fill_form(&mut state);
    reduce(&mut state, UiAction::SubmitSectorForm).expect("command");

    reduce(&mut state, UiAction::Navigate(View::Home));
    assert_eq!(state.sector_form.phase, FormPhase::Submitting);

    apply_event(
        &mut state,
        UiEvent::SubmissionProcessed(NewSubmission {
            sector_name: "Water Utility".to_string(),
            document_name: "permit.pdf".to_string(),
            longitude_file_name: "lng.csv".to_string(),
            latitude_file_name: "lat.csv".to_string(),
        }),
    );
    assert_eq!(state.controller.submissions().len(), 1);
}

#[test]
fn failed_dispatch_returns_form_to_editing() {
    let mut state = shell();
    reduce(&mut state, UiAction::Navigate(View::SectorDashboard));
    reduce(&mut state, UiAction::OpenSectorForm);
    fill_form(&mut state);
    reduce(&mut state, UiAction::SubmitSectorForm).expect("command");

    command_failed(
        &mut state,
        &UiError::from_message(UiErrorContext::BackendStartup, "worker gone"),
    );
    assert_eq!(state.sector_form.phase, FormPhase::Editing);
    assert_eq!(state.banner.clone().expect("banner").message, "worker gone");
}

#[test]
fn startup_corruption_is_shown_as_warning() {
    let store = MemoryStore::new().with_entry(SUBMISSIONS_KEY, "[oops");
    let state = shell_with(store, ControllerConfig::default());

    let banner = state.banner.clone().expect("banner");
    assert_eq!(banner.severity, StatusBannerSeverity::Warning);
    assert!(state.controller.submissions().is_empty());

    let mut state = state;
    reduce(&mut state, UiAction::DismissBanner);
    assert_eq!(state.banner, None);
}

#[test]
fn guarded_dashboard_redirect_lands_on_prefilled_login() {
    let store = MemoryStore::new().with_entry("manager_pass", "kept");
    let mut state = shell_with(
        store,
        ControllerConfig {
            dashboard_access: DashboardAccess::RequireRole,
        },
    );

    reduce(&mut state, UiAction::Navigate(View::ManagerDashboard));
    assert_eq!(state.controller.current_view(), View::Login);
    assert_eq!(state.login.password, "kept");
    assert_eq!(
        state.banner.clone().expect("banner").severity,
        StatusBannerSeverity::Warning
    );
}

#[test]
fn memory_store_is_untouched_without_remember() {
    let mut store = MemoryStore::new();
    store.set_string("other", "x".to_string()).expect("seed");
    let mut state = shell_with(store, ControllerConfig::default());
    reduce(&mut state, UiAction::Navigate(View::Login));
    state.login.password = "pw".to_string();
    reduce(&mut state, UiAction::SubmitLogin);
    assert_eq!(state.controller.saved_credential(Role::Manager), "");
}
