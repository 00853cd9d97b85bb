//! Intake form core: validation rules, the form state machine and the
//! outbound relay gateway it drives.

pub mod config;
pub mod controller;
pub mod gateway;
pub mod validation;

pub use config::{load_settings, AppSettings, RelaySettings, SettingsError};
pub use controller::{IntakeAction, IntakeController, IntakeEffect, IntakeState, IntakeView};
pub use gateway::{HttpRelayGateway, MissingRelayGateway, SubmissionGateway};
