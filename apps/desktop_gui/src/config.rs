use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use portal_core::DashboardAccess;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "portal.toml";
pub const ENV_PREFIX: &str = "PORTAL__";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "eims-portal", about = "Sector submission portal")]
pub struct Args {
    /// Directory holding `storage.json`.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// TOML settings file; defaults to `portal.toml` in the working directory.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub processing_delay_ms: u64,
    pub dashboard_access: DashboardAccess,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            processing_delay_ms: 1500,
            dashboard_access: DashboardAccess::Open,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    data_dir: Option<PathBuf>,
    processing_delay_ms: Option<u64>,
    dashboard_access: Option<String>,
    log_filter: Option<String>,
}

/// Settings plus the problems that were skipped over while loading them.
/// Logging is not up yet at load time, so the caller reports `warnings`.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

pub fn load_settings(args: &Args) -> anyhow::Result<LoadedSettings> {
    load_settings_with(args, Path::new(DEFAULT_CONFIG_FILE), |name| {
        std::env::var(name).ok()
    })
}

/// Defaults, then the TOML file, then `PORTAL__*` variables, then flags.
pub fn load_settings_with(
    args: &Args,
    default_file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<LoadedSettings> {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();
    let mut source = None;

    let file_cfg = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            source = Some(path.clone());
            Some(
                toml::from_str::<FileSettings>(&raw)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?,
            )
        }
        None => match fs::read_to_string(default_file) {
            Ok(raw) => match toml::from_str::<FileSettings>(&raw) {
                Ok(parsed) => {
                    source = Some(default_file.to_path_buf());
                    Some(parsed)
                }
                Err(err) => {
                    warnings.push(format!(
                        "ignoring {}: {err}",
                        default_file.display()
                    ));
                    None
                }
            },
            Err(_) => None,
        },
    };

    if let Some(file_cfg) = file_cfg {
        if let Some(v) = file_cfg.data_dir {
            settings.data_dir = Some(v);
        }
        if let Some(v) = file_cfg.processing_delay_ms {
            settings.processing_delay_ms = v;
        }
        if let Some(v) = file_cfg.dashboard_access {
            apply_dashboard_access(&mut settings, "dashboard_access", &v, &mut warnings);
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    let var = |name: &str| env(&format!("{ENV_PREFIX}{name}"));
    if let Some(v) = var("DATA_DIR") {
        settings.data_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = var("PROCESSING_DELAY_MS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.processing_delay_ms = parsed,
            Err(err) => warnings.push(format!(
                "ignoring {ENV_PREFIX}PROCESSING_DELAY_MS={v:?}: {err}"
            )),
        }
    }
    if let Some(v) = var("DASHBOARD_ACCESS") {
        let name = format!("{ENV_PREFIX}DASHBOARD_ACCESS");
        apply_dashboard_access(&mut settings, &name, &v, &mut warnings);
    }
    if let Some(v) = var("LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(dir) = &args.data_dir {
        settings.data_dir = Some(dir.clone());
    }

    Ok(LoadedSettings {
        settings,
        source,
        warnings,
    })
}

fn apply_dashboard_access(
    settings: &mut Settings,
    name: &str,
    raw: &str,
    warnings: &mut Vec<String>,
) {
    match raw.parse::<DashboardAccess>() {
        Ok(access) => settings.dashboard_access = access,
        Err(err) => warnings.push(format!("ignoring {name}={raw:?}: {err}")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_root: PathBuf,
    pub store_path: PathBuf,
}

impl AppPaths {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let root = match &settings.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("unable to resolve local app data dir"))?
                .join("eims_portal"),
        };
        Ok(Self {
            store_path: root.join("storage.json"),
            data_root: root,
        })
    }
}
