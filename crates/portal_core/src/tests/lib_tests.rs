use super::*;
use shared::ErrorKind;
use storage::{JsonFileStore, MemoryStore, StorageError, StorageResult, SUBMISSIONS_KEY};

/// Store whose reads succeed from a backing map and whose writes always fail.
struct FailingWriteStore {
    inner: MemoryStore,
}

impl FailingWriteStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
        }
    }
}

impl KeyValueStore for FailingWriteStore {
    fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_string(key)
    }

    fn set_string(&mut self, _key: &str, _value: String) -> StorageResult<()> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get_string(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn set_string(&mut self, _key: &str, _value: String) -> StorageResult<()> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Ok(())
    }
}

fn fresh() -> SessionController {
    SessionController::new(Box::new(MemoryStore::new()), ControllerConfig::default())
}

fn guarded() -> SessionController {
    SessionController::new(
        Box::new(MemoryStore::new()),
        ControllerConfig {
            dashboard_access: DashboardAccess::RequireRole,
        },
    )
}

fn roads_authority() -> NewSubmission {
    NewSubmission {
        sector_name: "Roads Authority".to_string(),
        document_name: "permit.pdf".to_string(),
        longitude_file_name: "lng.csv".to_string(),
        latitude_file_name: "lat.csv".to_string(),
    }
}

#[test]
fn starts_with_default_session() {
    let controller = fresh();
    assert_eq!(controller.language(), Language::En);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.current_view(), View::Home);
    assert_eq!(controller.user(), UserState::anonymous());
    assert!(controller.submissions().is_empty());
    assert!(controller.warnings().is_empty());
}

#[test]
fn navigate_is_last_write_wins_for_any_sequence() {
    let mut controller = fresh();
    let sequence = [
        View::SectorDashboard,
        View::About,
        View::About,
        View::ManagerDashboard,
        View::LearnMore,
        View::Login,
        View::Home,
        View::SectorDashboard,
    ];
    for view in sequence {
        assert_eq!(controller.navigate(view), view);
        assert_eq!(controller.current_view(), view);
    }
    assert!(!controller.user().is_authenticated());
    assert!(controller.warnings().is_empty());
}

#[test]
fn language_and_theme_do_not_touch_other_state() {
    let mut controller = fresh();
    controller.navigate(View::About);
    controller.set_language(Language::Om);
    controller.set_theme(Theme::Dark);
    assert_eq!(controller.current_view(), View::About);
    assert_eq!(controller.language(), Language::Om);
    assert_eq!(controller.toggle_theme(), Theme::Light);
    assert_eq!(controller.toggle_theme(), Theme::Dark);
}

#[test]
fn login_then_logout_restores_anonymous_home_for_both_roles() {
    for role in Role::ALL {
        let mut controller = fresh();
        let landed = controller.login(role, "x", false).expect("login");
        assert_eq!(landed, role.dashboard());
        assert_eq!(controller.current_view(), role.dashboard());
        assert_eq!(controller.user(), UserState::signed_in(role));

        controller.logout();
        assert_eq!(controller.user(), UserState::anonymous());
        assert!(!controller.user().is_authenticated());
        assert_eq!(controller.current_view(), View::Home);
    }
}

#[test]
fn empty_credential_is_rejected_without_state_change() {
    let mut controller = fresh();
    controller.navigate(View::Login);

    let err = controller
        .login(Role::Manager, "", true)
        .expect_err("empty credential");
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(controller.user(), UserState::anonymous());
    assert_eq!(controller.current_view(), View::Login);
    assert_eq!(controller.saved_credential(Role::Manager), "");
}

#[test]
fn whitespace_credential_counts_as_non_empty() {
    let mut controller = fresh();
    controller.login(Role::Sector, " ", false).expect("login");
    assert!(controller.user().is_authenticated());
}

#[test]
fn remember_stores_credential_per_role() {
    let mut controller = fresh();
    controller.login(Role::Sector, "s3cret", true).expect("login");
    controller.logout();

    assert_eq!(controller.saved_credential(Role::Sector), "s3cret");
    assert_eq!(controller.saved_credential(Role::Manager), "");

    controller.login(Role::Manager, "other", false).expect("login");
    assert_eq!(controller.saved_credential(Role::Manager), "");

    controller.forget_credential(Role::Sector);
    assert_eq!(controller.saved_credential(Role::Sector), "");
}

#[test]
fn fresh_store_then_one_submission() {
    let mut controller = fresh();
    assert!(controller.submissions().is_empty());

    let stored = controller.add_submission(roads_authority());

    assert_eq!(controller.submissions().len(), 1);
    let first = &controller.submissions()[0];
    assert_eq!(first, &stored);
    assert_eq!(first.sector_name, "Roads Authority");
    assert_eq!(first.document_name, "permit.pdf");
    assert!(!first.id.as_str().is_empty());
    assert!(!first.submitted_at.is_empty());
}

#[test]
fn submissions_are_append_only_with_distinct_ids() {
    let mut controller = fresh();
    let a = controller.add_submission(roads_authority());
    let b = controller.add_submission(roads_authority());
    let mut water = roads_authority();
    water.sector_name = "Water Utility".to_string();
    let c = controller.add_submission(water);

    let ids: Vec<_> = controller.submissions().iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids, vec![a.id.clone(), b.id.clone(), c.id.clone()]);
    assert_ne!(a.id, b.id);
    assert_eq!(controller.submissions()[2].sector_name, "Water Utility");
}

#[test]
fn every_append_is_mirrored_to_durable_storage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");

    let first_id = {
        let store = JsonFileStore::open(&path).expect("open");
        let mut controller = SessionController::new(Box::new(store), ControllerConfig::default());
        let first = controller.add_submission(roads_authority());
        controller.add_submission(roads_authority());
        first.id
    };

    let reopened = JsonFileStore::open(&path).expect("reopen");
    let controller = SessionController::new(Box::new(reopened), ControllerConfig::default());
    assert_eq!(controller.submissions().len(), 2);
    assert_eq!(controller.submissions()[0].id, first_id);
    assert!(controller.warnings().is_empty());
}

#[test]
fn malformed_durable_data_fails_closed() {
    let store = MemoryStore::new().with_entry(SUBMISSIONS_KEY, "{not a list");
    let mut controller = SessionController::new(Box::new(store), ControllerConfig::default());

    assert!(controller.submissions().is_empty());
    let warnings = controller.take_warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].operation, Operation::LoadSubmissions);
    assert_eq!(warnings[0].error.kind(), ErrorKind::DataCorruption);
    assert!(controller.warnings().is_empty());

    controller.add_submission(roads_authority());
    assert_eq!(controller.submissions().len(), 1);
}

#[test]
fn unreadable_storage_starts_empty_with_warning() {
    let controller = SessionController::new(Box::new(UnreadableStore), ControllerConfig::default());
    assert!(controller.submissions().is_empty());
    assert_eq!(controller.warnings().len(), 1);
    assert_eq!(controller.warnings()[0].error.kind(), ErrorKind::StorageRead);
}

#[test]
fn write_failure_keeps_in_memory_submission() {
    let mut controller =
        SessionController::new(Box::new(FailingWriteStore::new()), ControllerConfig::default());

    let stored = controller.add_submission(roads_authority());

    assert_eq!(controller.submissions(), &[stored][..]);
    let warnings = controller.take_warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].operation, Operation::AddSubmission);
    assert_eq!(warnings[0].error.kind(), ErrorKind::StorageWrite);
}

#[test]
fn remember_failure_does_not_block_login() {
    let mut controller =
        SessionController::new(Box::new(FailingWriteStore::new()), ControllerConfig::default());
    let landed = controller.login(Role::Manager, "pw", true).expect("login");
    assert_eq!(landed, View::ManagerDashboard);
    assert!(controller.user().is_authenticated());
    assert_eq!(controller.warnings().len(), 1);
    assert_eq!(controller.warnings()[0].operation, Operation::RememberCredential);
}

#[test]
fn guarded_dashboards_redirect_to_login() {
    let mut controller = guarded();
    assert_eq!(controller.navigate(View::ManagerDashboard), View::Login);
    assert_eq!(controller.current_view(), View::Login);
    assert_eq!(controller.warnings()[0].error.kind(), ErrorKind::AccessDenied);

    controller.login(Role::Sector, "pw", false).expect("login");
    assert_eq!(controller.current_view(), View::SectorDashboard);
    assert_eq!(controller.navigate(View::ManagerDashboard), View::Login);
    assert_eq!(controller.navigate(View::SectorDashboard), View::SectorDashboard);
    assert_eq!(controller.navigate(View::About), View::About);
}

#[test]
fn translates_against_active_language() {
    let mut controller = fresh();
    let english = controller.t("home").to_string();
    controller.set_language(Language::Am);
    let amharic = controller.t("home");
    assert_eq!(amharic, "መነሻ");
    assert_ne!(amharic, english);
    assert_eq!(controller.t("unknownKey"), "unknownKey");
}

#[test]
fn custom_translator_is_used() {
    struct Shouting;

    impl Translator for Shouting {
        fn lookup(&self, _language: Language, key: &str) -> Option<&str> {
            (key == "home").then_some("HOME!")
        }
    }

    let controller = SessionController::with_translator(
        Box::new(MemoryStore::new()),
        ControllerConfig::default(),
        Box::new(Shouting),
    );
    assert_eq!(controller.t("home"), "HOME!");
    assert_eq!(controller.t("about"), "about");
}
