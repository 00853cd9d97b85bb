//! Practitioner profile content shown around the intake form.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub about: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub contact: ContactDetails,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("profile file '{path}' is not valid profile JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl ProfileData {
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let raw = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ProfileError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            name: "Your Practitioner".into(),
            title: "Counselling Psychologist".into(),
            about: "A safe, confidential space to talk things through at your own pace.".into(),
            specialties: vec![
                "Anxiety & Stress".into(),
                "Relationships".into(),
                "Grief & Loss".into(),
            ],
            contact: ContactDetails {
                phone: "+91 00000 00000".into(),
                address: "Address available on request".into(),
            },
        }
    }
}
