use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "intake.toml";
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_RELAY_SUBJECT: &str = "New Therapy Consultation Request";
pub const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySettings {
    pub endpoint: String,
    pub access_key: String,
    pub subject: String,
    pub timeout_secs: u64,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.into(),
            access_key: String::new(),
            subject: DEFAULT_RELAY_SUBJECT.into(),
            timeout_secs: DEFAULT_RELAY_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("relay access key is not configured (set RELAY_ACCESS_KEY or access_key in {DEFAULT_SETTINGS_FILE})")]
    MissingAccessKey,
    #[error("relay endpoint '{endpoint}' is not a valid URL: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("relay endpoint '{endpoint}' must use http or https")]
    UnsupportedScheme { endpoint: String },
    #[error("relay timeout must be at least one second")]
    ZeroTimeout,
}

impl RelaySettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.access_key.trim().is_empty() {
            return Err(SettingsError::MissingAccessKey);
        }
        let endpoint = Url::parse(&self.endpoint).map_err(|err| SettingsError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SettingsError::UnsupportedScheme {
                endpoint: self.endpoint.clone(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub relay: RelaySettings,
    pub profile_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    endpoint: Option<String>,
    access_key: Option<String>,
    subject: Option<String>,
    timeout_secs: Option<u64>,
    profile_path: Option<PathBuf>,
}

/// Defaults, then `path` (or `intake.toml` in the working directory), then
/// environment overrides. A missing file is fine; an unreadable one is not.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<AppSettings> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));
    let mut settings = AppSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = parse_settings_file(&raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn parse_settings_file(raw: &str) -> Result<FileSettings, toml::de::Error> {
    toml::from_str(raw)
}

fn apply_file_settings(settings: &mut AppSettings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.endpoint {
        settings.relay.endpoint = v;
    }
    if let Some(v) = file_cfg.access_key {
        settings.relay.access_key = v;
    }
    if let Some(v) = file_cfg.subject {
        settings.relay.subject = v;
    }
    if let Some(v) = file_cfg.timeout_secs {
        settings.relay.timeout_secs = v;
    }
    if let Some(v) = file_cfg.profile_path {
        settings.profile_path = Some(v);
    }
}

fn apply_env_overrides(settings: &mut AppSettings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read("RELAY_ENDPOINT") {
        settings.relay.endpoint = v;
    }
    if let Some(v) = read("APP__RELAY_ENDPOINT") {
        settings.relay.endpoint = v;
    }

    if let Some(v) = read("RELAY_ACCESS_KEY") {
        settings.relay.access_key = v;
    }
    if let Some(v) = read("APP__RELAY_ACCESS_KEY") {
        settings.relay.access_key = v;
    }

    if let Some(v) = read("APP__RELAY_SUBJECT") {
        settings.relay.subject = v;
    }

    if let Some(v) = read("APP__RELAY_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.relay.timeout_secs = parsed,
            Err(err) => {
                tracing::warn!(value = %v, "ignoring APP__RELAY_TIMEOUT_SECS: {err}");
            }
        }
    }

    if let Some(v) = read("APP__PROFILE_PATH") {
        settings.profile_path = Some(PathBuf::from(v));
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
