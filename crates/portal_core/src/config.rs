use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::PortalError;

/// How `navigate` treats the role dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardAccess {
    /// Any view can be reached directly, signed in or not.
    #[default]
    Open,
    /// Dashboards require a signed-in user of the matching role; other
    /// attempts land on the login view.
    RequireRole,
}

impl DashboardAccess {
    pub fn as_str(self) -> &'static str {
        match self {
            DashboardAccess::Open => "open",
            DashboardAccess::RequireRole => "require_role",
        }
    }
}

impl FromStr for DashboardAccess {
    type Err = PortalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "open" => Ok(DashboardAccess::Open),
            "require_role" | "guarded" => Ok(DashboardAccess::RequireRole),
            other => Err(PortalError::Config(format!(
                "unknown dashboard access policy '{other}' (expected 'open' or 'require_role')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub dashboard_access: DashboardAccess,
}
