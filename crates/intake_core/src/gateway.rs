use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use shared::{
    domain::SubmissionResult,
    error::{ErrorCode, SubmissionFailure},
    protocol::{IntakeSubmission, RelayRequest, RelayResponse},
};
use tracing::{info, warn};

use crate::config::RelaySettings;

const FALLBACK_REJECTION_REASON: &str = "relay reported success=false";

/// Outbound side of a submission. One call per submit, no retries.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, submission: &IntakeSubmission) -> SubmissionResult;
}

/// Gateway for a JSON form relay that answers `{"success": bool, ...}`.
pub struct HttpRelayGateway {
    http: Client,
    endpoint: String,
    access_key: String,
    subject: String,
}

impl HttpRelayGateway {
    pub fn new(settings: &RelaySettings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self::with_client(http, settings))
    }

    pub fn with_client(http: Client, settings: &RelaySettings) -> Self {
        Self {
            http,
            endpoint: settings.endpoint.clone(),
            access_key: settings.access_key.clone(),
            subject: settings.subject.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts the submission and reads the relay verdict. HTTP error statuses
    /// are not failures on their own: relays answer 4xx with a JSON
    /// `success: false` body, which is a rejection.
    pub async fn send(&self, submission: &IntakeSubmission) -> Result<(), SubmissionFailure> {
        let request = RelayRequest::new(&self.access_key, &self.subject, submission);
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify_transport_error)?;
        let verdict: RelayResponse = serde_json::from_slice(&body).map_err(|err| {
            SubmissionFailure::new(
                ErrorCode::MalformedResponse,
                format!("relay answered {status} with an unreadable body: {err}"),
            )
        })?;

        if verdict.success {
            Ok(())
        } else {
            Err(SubmissionFailure::rejected(
                verdict
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_REJECTION_REASON.to_string()),
            ))
        }
    }
}

#[async_trait]
impl SubmissionGateway for HttpRelayGateway {
    async fn submit(&self, submission: &IntakeSubmission) -> SubmissionResult {
        match self.send(submission).await {
            Ok(()) => {
                info!(endpoint = %self.endpoint, "relay accepted submission");
                SubmissionResult::Ok
            }
            Err(failure) => {
                warn!(
                    endpoint = %self.endpoint,
                    code = ?failure.code,
                    "relay submission failed: {}",
                    failure.message
                );
                failure.into()
            }
        }
    }
}

fn classify_transport_error(err: reqwest::Error) -> SubmissionFailure {
    let code = if err.is_timeout() {
        ErrorCode::Timeout
    } else if err.is_decode() {
        ErrorCode::MalformedResponse
    } else {
        ErrorCode::Transport
    };
    SubmissionFailure::new(code, err.to_string())
}

/// Stand-in used when no relay credential is configured; every submission
/// is rejected locally without touching the network.
pub struct MissingRelayGateway;

#[async_trait]
impl SubmissionGateway for MissingRelayGateway {
    async fn submit(&self, _submission: &IntakeSubmission) -> SubmissionResult {
        warn!("submission attempted without a configured relay access key");
        SubmissionResult::Rejected("relay access key not configured".to_string())
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
