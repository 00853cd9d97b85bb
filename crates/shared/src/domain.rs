use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Phone, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.message.is_empty()
    }
}

/// Per-field validation messages. Keys are the closed [`Field`] set, so an
/// error can never reference a field the form does not have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Returns true when an error was present and got removed.
    pub fn remove(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "submitted_name", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Idle,
    FormOpen,
    Submitting,
    Success(String),
}

impl ViewState {
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::FormOpen => "form_open",
            ViewState::Submitting => "submitting",
            ViewState::Success(_) => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Ok,
    Rejected(String),
    NetworkFailure,
}

/// Blocking notice shown after a submission did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureNotice {
    SubmissionRejected,
    NetworkFailure,
}

impl FailureNotice {
    pub fn message(self) -> &'static str {
        match self {
            FailureNotice::SubmissionRejected => "Something went wrong. Please try again later.",
            FailureNotice::NetworkFailure => {
                "Network error. Please check your connection and try again."
            }
        }
    }
}
