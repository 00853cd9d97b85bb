use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{FailureNotice, SubmissionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Rejected,
    Transport,
    Timeout,
    MalformedResponse,
}

impl ErrorCode {
    /// Only a relay that answered with `success: false` counts as a logical
    /// rejection; everything else is a connectivity problem.
    pub fn is_transport(self) -> bool {
        !matches!(self, ErrorCode::Rejected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code:?}: {message}")]
pub struct SubmissionFailure {
    pub code: ErrorCode,
    pub message: String,
}

impl SubmissionFailure {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Rejected, message)
    }

    pub fn notice(&self) -> FailureNotice {
        if self.code.is_transport() {
            FailureNotice::NetworkFailure
        } else {
            FailureNotice::SubmissionRejected
        }
    }
}

impl From<SubmissionFailure> for SubmissionResult {
    fn from(value: SubmissionFailure) -> Self {
        if value.code.is_transport() {
            SubmissionResult::NetworkFailure
        } else {
            SubmissionResult::Rejected(value.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_keeps_reason() {
        let result: SubmissionResult = SubmissionFailure::rejected("invalid access key").into();
        assert_eq!(result, SubmissionResult::Rejected("invalid access key".to_string()));
    }

    #[test]
    fn transport_codes_collapse_to_network_failure() {
        for code in [
            ErrorCode::Transport,
            ErrorCode::Timeout,
            ErrorCode::MalformedResponse,
        ] {
            let failure = SubmissionFailure::new(code, "boom");
            assert_eq!(failure.notice(), FailureNotice::NetworkFailure);
            assert_eq!(SubmissionResult::from(failure), SubmissionResult::NetworkFailure);
        }
    }
}
