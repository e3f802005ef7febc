use std::fmt;

use serde::{Deserialize, Serialize};

/// Display format for `SectorSubmission::submitted_at` (local time).
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Am,
    Om,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Am, Language::Om];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Am => "am",
            Language::Om => "om",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "am" => Some(Language::Am),
            "om" => Some(Language::Om),
            _ => None,
        }
    }

    /// Label shown in the language selector, written in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Am => "አማርኛ",
            Language::Om => "Afaan Oromoo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Sector,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Manager, Role::Sector];

    pub fn code(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Sector => "sector",
        }
    }

    /// View a successful login for this role lands on.
    pub fn dashboard(self) -> View {
        match self {
            Role::Manager => View::ManagerDashboard,
            Role::Sector => View::SectorDashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    #[default]
    Home,
    About,
    LearnMore,
    Login,
    ManagerDashboard,
    SectorDashboard,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::About,
        View::LearnMore,
        View::Login,
        View::ManagerDashboard,
        View::SectorDashboard,
    ];

    /// Role a dashboard view belongs to; `None` for public views.
    pub fn required_role(self) -> Option<Role> {
        match self {
            View::ManagerDashboard => Some(Role::Manager),
            View::SectorDashboard => Some(Role::Sector),
            View::Home | View::About | View::LearnMore | View::Login => None,
        }
    }

    pub fn is_dashboard(self) -> bool {
        self.required_role().is_some()
    }

    /// Translation key for the view's navigation label.
    pub fn label_key(self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::LearnMore => "learnMore",
            View::Login => "login",
            View::ManagerDashboard => "managerDashboard",
            View::SectorDashboard => "sectorPortal",
        }
    }
}

/// Signed-in state. Authentication is derived from the role, so a role
/// without authentication (or the reverse) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserState {
    role: Option<Role>,
}

impl UserState {
    pub fn anonymous() -> Self {
        Self { role: None }
    }

    pub fn signed_in(role: Role) -> Self {
        Self { role: Some(role) }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub language: Language,
    pub theme: Theme,
    pub view: View,
    pub user: UserState,
}

/// Caller-supplied part of a submission; id and timestamp are assigned on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    pub sector_name: String,
    pub document_name: String,
    pub longitude_file_name: String,
    pub latitude_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSubmission {
    pub id: SubmissionId,
    pub sector_name: String,
    pub document_name: String,
    #[serde(alias = "longitudeFile")]
    pub longitude_file_name: String,
    #[serde(alias = "latitudeFile")]
    pub latitude_file_name: String,
    #[serde(alias = "timestamp")]
    pub submitted_at: String,
}

impl SectorSubmission {
    pub fn from_new(id: SubmissionId, submitted_at: String, new: NewSubmission) -> Self {
        Self {
            id,
            sector_name: new.sector_name,
            document_name: new.document_name,
            longitude_file_name: new.longitude_file_name,
            latitude_file_name: new.latitude_file_name,
            submitted_at,
        }
    }

    /// Geodata column text for the manager table.
    pub fn geodata_label(&self) -> String {
        format!("{}, {}", self.longitude_file_name, self.latitude_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_state_authentication_follows_role() {
        assert!(!UserState::anonymous().is_authenticated());
        assert_eq!(UserState::default(), UserState::anonymous());
        let user = UserState::signed_in(Role::Sector);
        assert!(user.is_authenticated());
        assert_eq!(user.role(), Some(Role::Sector));
    }

    #[test]
    fn session_defaults_match_startup_state() {
        let session = Session::default();
        assert_eq!(session.language, Language::En);
        assert_eq!(session.theme, Theme::Light);
        assert_eq!(session.view, View::Home);
        assert!(!session.user.is_authenticated());
    }

    #[test]
    fn dashboards_map_to_roles() {
        assert_eq!(Role::Manager.dashboard(), View::ManagerDashboard);
        assert_eq!(Role::Sector.dashboard(), View::SectorDashboard);
        for view in View::ALL {
            assert_eq!(
                view.is_dashboard(),
                matches!(view, View::ManagerDashboard | View::SectorDashboard)
            );
        }
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code(" AM "), Some(Language::Am));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn submission_uses_camel_case_wire_names() {
        let submission = SectorSubmission {
            id: SubmissionId("abc".to_string()),
            sector_name: "Water Utility".to_string(),
            document_name: "permit.pdf".to_string(),
            longitude_file_name: "lng.csv".to_string(),
            latitude_file_name: "lat.csv".to_string(),
            submitted_at: "2024-05-01 10:00:00".to_string(),
        };
        let value = serde_json::to_value(&submission).expect("encode");
        assert_eq!(value["id"], "abc");
        assert_eq!(value["sectorName"], "Water Utility");
        assert_eq!(value["longitudeFileName"], "lng.csv");
        assert_eq!(value["submittedAt"], "2024-05-01 10:00:00");
    }

    #[test]
    fn decodes_legacy_browser_field_names() {
        let raw = r#"{
            "id": "k3j9x0a1b",
            "sectorName": "Telecom",
            "documentName": "license.pdf",
            "longitudeFile": "lng.csv",
            "latitudeFile": "lat.csv",
            "timestamp": "5/1/2024, 10:00:00 AM"
        }"#;
        let submission: SectorSubmission = serde_json::from_str(raw).expect("decode");
        assert_eq!(submission.id.as_str(), "k3j9x0a1b");
        assert_eq!(submission.longitude_file_name, "lng.csv");
        assert_eq!(submission.latitude_file_name, "lat.csv");
        assert_eq!(submission.submitted_at, "5/1/2024, 10:00:00 AM");
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = SubmissionId::generate();
        let b = SubmissionId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }
}
