//! Call API DTOs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::{InitiateCallError, RecordTranscriptionError, TranscriptionInput};
use crate::domain::call_record::StoreError;
use crate::domain::call_status::{CallStatus, CallStatusEvent};

/// Status callback form posted by the provider
#[derive(Debug, Default, Deserialize)]
pub struct CallStatusForm {
    #[serde(rename = "Called")]
    pub called: Option<String>,
    #[serde(rename = "CallSid")]
    pub call_sid: Option<String>,
    #[serde(rename = "CallStatus")]
    pub call_status: Option<String>,
}

impl From<CallStatusForm> for CallStatusEvent {
    fn from(form: CallStatusForm) -> Self {
        CallStatusEvent {
            call_id: form.call_sid.unwrap_or_default(),
            destination: form.called,
            status: CallStatus::parse(form.call_status.as_deref().unwrap_or_default()),
        }
    }
}

/// Transcription callback form posted by the provider
#[derive(Debug, Default, Deserialize)]
pub struct TranscriptionForm {
    #[serde(rename = "To")]
    pub to: Option<String>,
    #[serde(rename = "CallSid")]
    pub call_sid: Option<String>,
    #[serde(rename = "TranscriptionText")]
    pub transcription_text: Option<String>,
    #[serde(rename = "CallStatus")]
    pub call_status: Option<String>,
    #[serde(rename = "RecordingUrl")]
    pub recording_url: Option<String>,
}

impl From<TranscriptionForm> for TranscriptionInput {
    fn from(form: TranscriptionForm) -> Self {
        TranscriptionInput {
            phone_number: form.to,
            call_id: form.call_sid,
            transcription: form.transcription_text,
            call_status: form.call_status,
            recording_url: form.recording_url,
        }
    }
}

/// Outbound call request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateCallRequest {
    pub phone_number: Option<String>,
}

/// Outbound call accepted
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateCallResponse {
    pub message: String,
    pub call_sid: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned to API callers.
///
/// Carries only a generic message; the underlying cause is logged where it
/// happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Store failures: duplicates are a conflict, everything else a 500
    pub fn from_store(err: &StoreError, message: &str) -> Self {
        match err {
            StoreError::UniqueConstraintViolation(_) => Self::new(StatusCode::CONFLICT, message),
            StoreError::DataAccess(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<RecordTranscriptionError> for ApiError {
    fn from(err: RecordTranscriptionError) -> Self {
        match err {
            RecordTranscriptionError::Invalid(e) => ApiError::new(StatusCode::BAD_REQUEST, e.to_string()),
            RecordTranscriptionError::Store(e) => ApiError::from_store(&e, "Failed to save transcription"),
        }
    }
}

impl From<InitiateCallError> for ApiError {
    fn from(err: InitiateCallError) -> Self {
        match err {
            InitiateCallError::Invalid(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, "Phone number is required")
            }
            InitiateCallError::Provider(_) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to initiate call")
            }
        }
    }
}
