use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::{Complaint, Identity, MIN_COMPLAINT_LENGTH};
use crate::error::{ComplaintError, ComplaintResult};

/// Rejects complaint bodies that are blank or shorter than the minimum once trimmed.
pub fn validate_complaint_text(text: &str) -> Result<(), ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("empty")
            .with_message("Complaint cannot be empty".into()));
    }
    if trimmed.chars().count() < MIN_COMPLAINT_LENGTH {
        return Err(ValidationError::new("too_short").with_message(
            format!("Complaint must be at least {MIN_COMPLAINT_LENGTH} characters long").into(),
        ));
    }
    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SubmitComplaintRequest {
    #[validate(custom(function = "validate_complaint_text"))]
    pub complaint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EditComplaintRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub complaint_id: String,
    #[validate(custom(function = "validate_complaint_text"))]
    pub complaint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DeleteComplaintRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub complaint_id: String,
}

/// The status is kept as a raw string here; the service owns the
/// `pending`/`resolved` check so direct callers get the same answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ToggleStatusRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub complaint_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub email: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

/// Parse a JSON body into a typed request and run its validation rules.
pub fn parse_request<T>(body: &str) -> ComplaintResult<T>
where
    T: DeserializeOwned + Validate,
{
    if body.trim().is_empty() {
        return Err(ComplaintError::InvalidInput("No data provided".to_string()));
    }
    let request: T = serde_json::from_str(body)
        .map_err(|e| ComplaintError::InvalidInput(format!("Invalid request data: {e}")))?;
    request.validate().map_err(validation_failure)?;
    Ok(request)
}

fn validation_failure(errors: ValidationErrors) -> ComplaintError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(msg) => msg.to_string(),
                None => format!("Missing required field: {field}"),
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid request data".to_string());
    ComplaintError::InvalidInput(message)
}

/// JSON body returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complaint: Option<Complaint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complaints: Option<Vec<Complaint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
}

impl ResponseBody {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            complaint: None,
            complaints: None,
            user: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::ok(message)
        }
    }

    pub fn with_complaint(mut self, complaint: Complaint) -> Self {
        self.complaint = Some(complaint);
        self
    }

    pub fn with_complaints(mut self, complaints: Vec<Complaint>) -> Self {
        self.complaints = Some(complaints);
        self
    }

    pub fn with_user(mut self, user: Identity) -> Self {
        self.user = Some(user);
        self
    }
}
