use serde::{Deserialize, Serialize};

use crate::domain::FormFields;

/// Field values handed to the submission gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeSubmission {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl From<&FormFields> for IntakeSubmission {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.name.clone(),
            phone: fields.phone.clone(),
            message: fields.message.clone(),
        }
    }
}

/// JSON body POSTed to the form relay. Key names are fixed by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl RelayRequest {
    pub fn new(
        access_key: impl Into<String>,
        subject: impl Into<String>,
        submission: &IntakeSubmission,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            subject: subject.into(),
            from_name: submission.name.clone(),
            phone: submission.phone.clone(),
            message: submission.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_request_uses_relay_key_names() {
        let submission = IntakeSubmission {
            name: "Asha".to_string(),
            phone: "9123456789".to_string(),
            message: "I've been feeling anxious lately.".to_string(),
        };
        let request = RelayRequest::new("key-123", "New Therapy Consultation Request", &submission);
        let value = serde_json::to_value(&request).expect("serialize");

        assert_eq!(value["access_key"], "key-123");
        assert_eq!(value["subject"], "New Therapy Consultation Request");
        assert_eq!(value["from_name"], "Asha");
        assert_eq!(value["Phone"], "9123456789");
        assert_eq!(value["Message"], "I've been feeling anxious lately.");
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn relay_response_ignores_unknown_fields() {
        let response: RelayResponse = serde_json::from_str(
            r#"{"success":false,"message":"invalid access key","body":{"data":1}}"#,
        )
        .expect("deserialize");
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("invalid access key"));
    }

    #[test]
    fn relay_response_requires_success_flag() {
        assert!(serde_json::from_str::<RelayResponse>(r#"{"message":"ok"}"#).is_err());
    }
}
