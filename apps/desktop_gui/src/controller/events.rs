//! Backend-to-UI events and error modeling for the desktop GUI.

use shared::domain::SubmissionResult;

pub enum UiEvent {
    Info(String),
    SubmissionFinished(SubmissionResult),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Settings,
    Profile,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    /// Whether the intake form can still reach the relay with this error
    /// on screen.
    pub fn blocks_submission(&self) -> bool {
        matches!(
            self.context,
            UiErrorContext::BackendStartup | UiErrorContext::Settings
        )
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_errors_do_not_block_submission() {
        let err = UiError::from_message(UiErrorContext::Profile, "profile.json missing");
        assert!(!err.blocks_submission());
        assert_eq!(err.message(), "profile.json missing");
    }

    #[test]
    fn settings_errors_block_submission() {
        let err = UiError::from_message(UiErrorContext::Settings, "access key missing");
        assert!(err.blocks_submission());
        assert_eq!(err.context(), UiErrorContext::Settings);
    }
}
