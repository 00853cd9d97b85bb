//! Intake form state machine.
//!
//! All state lives in [`IntakeState`] and only changes through
//! [`IntakeController::dispatch`]. Actions that need I/O return an
//! [`IntakeEffect`]; the caller runs it and feeds the outcome back as
//! [`IntakeAction::SubmissionFinished`]. While a submission is outstanding the
//! view stays in [`ViewState::Submitting`], which is also what rejects a
//! second submit.

use shared::{
    domain::{FailureNotice, Field, FieldErrors, FormFields, SubmissionResult, ViewState},
    protocol::IntakeSubmission,
};
use tracing::{debug, info, warn};

use crate::{gateway::SubmissionGateway, validation};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeAction {
    OpenForm,
    UpdateField { field: Field, value: String },
    Cancel,
    Submit,
    SubmissionFinished(SubmissionResult),
    ReturnToProfile,
    DismissNotice,
}

impl IntakeAction {
    fn name(&self) -> &'static str {
        match self {
            IntakeAction::OpenForm => "open_form",
            IntakeAction::UpdateField { .. } => "update_field",
            IntakeAction::Cancel => "cancel",
            IntakeAction::Submit => "submit",
            IntakeAction::SubmissionFinished(_) => "submission_finished",
            IntakeAction::ReturnToProfile => "return_to_profile",
            IntakeAction::DismissNotice => "dismiss_notice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeEffect {
    /// Send exactly this submission to the gateway once.
    Submit(IntakeSubmission),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeState {
    pub view: ViewState,
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub notice: Option<FailureNotice>,
}

/// Snapshot the presentation layer renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeView {
    pub view: ViewState,
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub notice: Option<FailureNotice>,
    pub controls_enabled: bool,
    pub submit_label: &'static str,
}

#[derive(Debug, Default)]
pub struct IntakeController {
    state: IntakeState,
}

impl IntakeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state.view
    }

    pub fn is_submitting(&self) -> bool {
        self.state.view == ViewState::Submitting
    }

    pub fn view(&self) -> IntakeView {
        let submitting = self.is_submitting();
        IntakeView {
            view: self.state.view.clone(),
            fields: self.state.fields.clone(),
            errors: self.state.errors.clone(),
            notice: self.state.notice,
            controls_enabled: !submitting,
            submit_label: if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
        }
    }

    pub fn dispatch(&mut self, action: IntakeAction) -> Option<IntakeEffect> {
        let action_name = action.name();
        let state = &mut self.state;
        match (action, state.view.clone()) {
            (IntakeAction::OpenForm, ViewState::Idle) => {
                state.view = ViewState::FormOpen;
                state.notice = None;
                info!("intake form opened");
                None
            }
            (IntakeAction::UpdateField { field, value }, ViewState::Idle | ViewState::FormOpen) => {
                state.fields.set(field, value);
                if state.errors.remove(field) {
                    debug!(field = field.as_str(), "cleared field error on edit");
                }
                None
            }
            (IntakeAction::Cancel, ViewState::FormOpen) => {
                state.view = ViewState::Idle;
                state.errors.clear();
                state.notice = None;
                info!("intake form cancelled");
                None
            }
            (IntakeAction::Submit, ViewState::FormOpen) => {
                let errors = validation::validate(&state.fields);
                if !errors.is_empty() {
                    let invalid: Vec<&str> = errors.fields().map(Field::as_str).collect();
                    debug!(?invalid, "intake form failed validation");
                    state.errors = errors;
                    return None;
                }
                state.errors.clear();
                state.notice = None;
                state.view = ViewState::Submitting;
                info!(
                    message_len = validation::form_value_len(&state.fields.message),
                    "submitting intake form"
                );
                Some(IntakeEffect::Submit(IntakeSubmission::from(&state.fields)))
            }
            (IntakeAction::SubmissionFinished(result), ViewState::Submitting) => {
                match result {
                    SubmissionResult::Ok => {
                        let submitted_name = std::mem::take(&mut state.fields.name);
                        state.fields.clear();
                        state.errors.clear();
                        state.notice = None;
                        state.view = ViewState::Success(submitted_name);
                        info!("intake submission accepted");
                    }
                    SubmissionResult::Rejected(reason) => {
                        warn!(%reason, "intake submission rejected by relay");
                        state.notice = Some(FailureNotice::SubmissionRejected);
                        state.view = ViewState::FormOpen;
                    }
                    SubmissionResult::NetworkFailure => {
                        warn!("intake submission failed to reach relay");
                        state.notice = Some(FailureNotice::NetworkFailure);
                        state.view = ViewState::FormOpen;
                    }
                }
                None
            }
            (IntakeAction::ReturnToProfile, ViewState::Success(_)) => {
                state.view = ViewState::Idle;
                info!("returned to profile");
                None
            }
            (IntakeAction::DismissNotice, _) => {
                state.notice = None;
                None
            }
            (_, view) => {
                debug!(
                    action = action_name,
                    state = view.label(),
                    "ignored intake action"
                );
                None
            }
        }
    }

    pub fn open_form(&mut self) {
        self.dispatch(IntakeAction::OpenForm);
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(IntakeAction::UpdateField {
            field,
            value: value.into(),
        });
    }

    pub fn cancel(&mut self) {
        self.dispatch(IntakeAction::Cancel);
    }

    /// Validates and, when the form is clean, moves to `Submitting` and
    /// returns the payload to send. `None` means nothing must be sent.
    pub fn submit(&mut self) -> Option<IntakeSubmission> {
        self.dispatch(IntakeAction::Submit)
            .map(|IntakeEffect::Submit(submission)| submission)
    }

    pub fn finish_submission(&mut self, result: SubmissionResult) {
        self.dispatch(IntakeAction::SubmissionFinished(result));
    }

    pub fn return_to_profile(&mut self) {
        self.dispatch(IntakeAction::ReturnToProfile);
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(IntakeAction::DismissNotice);
    }

    /// Runs a whole submit round trip against `gateway`. Returns the gateway
    /// outcome, or `None` when validation or state kept the call from
    /// happening.
    pub async fn submit_with<G>(&mut self, gateway: &G) -> Option<SubmissionResult>
    where
        G: SubmissionGateway + ?Sized,
    {
        let submission = self.submit()?;
        let result = gateway.submit(&submission).await;
        self.finish_submission(result.clone());
        Some(result)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
