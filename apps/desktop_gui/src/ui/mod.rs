//! UI layer for the desktop GUI: the profile page shell and its palette.

pub mod app;
pub mod theme;

pub use app::{IntakeApp, StartupConfig};
