//! Backend commands queued from UI to backend worker.

use shared::protocol::IntakeSubmission;

pub enum BackendCommand {
    SubmitIntake { submission: IntakeSubmission },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitIntake { .. } => "submit_intake",
        }
    }
}
