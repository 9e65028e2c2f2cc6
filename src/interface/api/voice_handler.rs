//! Voice and call webhook handlers

use axum::{
    extract::{rejection::FormRejection, FromRequest, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use tracing::{info, warn};

use super::call_dto::{
    ApiError, CallStatusForm, InitiateCallRequest, InitiateCallResponse, MessageResponse,
    TranscriptionForm,
};
use super::metrics_handler::{
    record_call_status, record_fallback_message, record_outbound_call, record_transcription_saved,
};
use super::state::AppState;
use crate::application::{DispatchOutcome, FallbackOutcome, InitiateCallError};
use crate::domain::call_status::CallStatusEvent;
use crate::domain::telephony::REMINDER_MESSAGE;
use crate::infrastructure::telephony::twiml::{Record, VoiceResponse};

const VOICE: &str = "alice";
const LANGUAGE: &str = "en-US";

fn twiml(response: VoiceResponse) -> Response {
    (
        [(header::CONTENT_TYPE, "text/xml")],
        response.to_xml(),
    )
        .into_response()
}

/// Reminder prompt for an answered outbound call; records the patient's reply
pub async fn voice_prompt() -> Response {
    info!("API: Serving reminder prompt");

    twiml(
        VoiceResponse::new()
            .say(REMINDER_MESSAGE, VOICE, LANGUAGE)
            .record(Record {
                max_length_secs: 30,
                transcribe: true,
                transcribe_callback: "/api/transcription".to_string(),
                action: "/api/call-status".to_string(),
                timeout_secs: 10,
            }),
    )
}

/// Inbound call: play the reminder and hang up
pub async fn incoming_call() -> Response {
    info!("API: Incoming call, playing reminder");

    twiml(
        VoiceResponse::new()
            .say(REMINDER_MESSAGE, VOICE, LANGUAGE)
            .hangup(),
    )
}

/// Read the call request as a form or JSON body, depending on `Content-Type`.
/// An unreadable body reads as a request without a number.
async fn read_call_request(request: Request) -> InitiateCallRequest {
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    let parsed = if is_form {
        Form::<InitiateCallRequest>::from_request(request, &())
            .await
            .map(|Form(request)| request)
            .map_err(|e| e.body_text())
    } else {
        Json::<InitiateCallRequest>::from_request(request, &())
            .await
            .map(|Json(request)| request)
            .map_err(|e| e.body_text())
    };

    parsed.unwrap_or_else(|e| {
        warn!("API: Unreadable call request: {}", e);
        InitiateCallRequest::default()
    })
}

/// Place an outbound reminder call
pub async fn initiate_call(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<InitiateCallResponse>, ApiError> {
    let request = read_call_request(request).await;

    let result = state
        .outbound_calls
        .initiate(request.phone_number.as_deref())
        .await;
    if !matches!(result, Err(InitiateCallError::Invalid(_))) {
        record_outbound_call(result.is_ok());
    }

    let call = result?;
    Ok(Json(InitiateCallResponse {
        message: "Call initiated".to_string(),
        call_sid: call.sid,
    }))
}

/// Status callback. Always acknowledged with 200 OK.
pub async fn call_status(
    State(state): State<AppState>,
    form: Result<Form<CallStatusForm>, FormRejection>,
) -> (StatusCode, &'static str) {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            warn!("API: Unreadable status callback: {}", e);
            CallStatusForm::default()
        }
    };

    let outcome = state.dispatcher.dispatch(&CallStatusEvent::from(form)).await;

    record_call_status(outcome.label());
    if let DispatchOutcome::Unreached(fallback) = &outcome {
        record_fallback_message(match fallback {
            FallbackOutcome::Sent => "sent",
            FallbackOutcome::Failed(_) => "failed",
            FallbackOutcome::NoDestination => "skipped",
        });
    }

    (StatusCode::OK, "OK")
}

/// Transcription callback: persist the patient's answer
pub async fn save_transcription(
    State(state): State<AppState>,
    form: Result<Form<TranscriptionForm>, FormRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            warn!("API: Unreadable transcription callback: {}", e);
            return Err(ApiError::new(StatusCode::BAD_REQUEST, "Invalid transcription payload"));
        }
    };

    state.responses.record_transcription(form.into()).await?;
    record_transcription_saved();

    Ok(Json(MessageResponse::new("Transcription saved successfully")))
}
