use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use roster::{FileRoster, PandascoreRoster, RosterError, RosterSource, DEFAULT_API_BASE_URL};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "champdex.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub roster_file: Option<PathBuf>,
    pub api_base_url: String,
    pub api_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_file: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    roster_file: Option<PathBuf>,
    api_base_url: Option<String>,
    api_token: Option<String>,
}

/// Defaults, then the TOML file at `path`, then environment variables.
///
/// A missing file is only an error when `required` is set (an explicit
/// `--config`).
pub fn load_settings(path: &Path, required: bool) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
            tracing::debug!(path = %path.display(), "loaded config file");
        }
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.roster_file {
        settings.roster_file = Some(v);
    }
    if let Some(v) = file_cfg.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = file_cfg.api_token {
        settings.api_token = Some(v);
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    let lookup = |name: &str| var(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = lookup("CHAMPDEX_ROSTER_FILE") {
        settings.roster_file = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("CHAMPDEX_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup("PANDASCORE_TOKEN") {
        settings.api_token = Some(v);
    }
    if let Some(v) = lookup("CHAMPDEX_API_TOKEN") {
        settings.api_token = Some(v);
    }
}

/// A configured roster file wins over the API.
pub fn build_roster_source(settings: &Settings) -> Result<Box<dyn RosterSource>, RosterError> {
    if let Some(path) = &settings.roster_file {
        return Ok(Box::new(FileRoster::new(path.clone())));
    }
    let api = PandascoreRoster::new(settings.api_base_url.clone(), settings.api_token.clone())?;
    Ok(Box::new(api))
}
