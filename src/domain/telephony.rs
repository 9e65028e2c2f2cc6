//! Telephony provider capabilities
//!
//! The dispatcher and the outbound-call use case only see these traits; the
//! provider client is injected at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Spoken to the patient on every reminder call
pub const REMINDER_MESSAGE: &str = "Hello, this is a reminder from your healthcare provider to confirm your medications for the day. \
Please confirm if you have taken your Aspirin, Cardivol, and Metformin today.";

/// Sent by SMS when the reminder call did not reach the patient
pub const FALLBACK_SMS_BODY: &str = "You missed a medication reminder call. \
Reply with 'YES' if you've taken your medication or 'NO' if you haven't.";

/// Telephony provider errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelephonyError {
    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Provider rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// An outbound call accepted by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCall {
    /// Provider call identifier
    pub sid: String,
    pub to: String,
}

/// Sends the fallback message when a call was not answered
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send_fallback_message(&self, phone_number: &str) -> Result<(), TelephonyError>;
}

/// Places outbound reminder calls
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Caller: Send + Sync {
    async fn place_call(&self, phone_number: &str) -> Result<PlacedCall, TelephonyError>;
}
