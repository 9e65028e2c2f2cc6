//! Provider-reported call outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final status of a call as reported by the status callback.
///
/// Values the provider may add later land in `Unrecognized` with the raw
/// string preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CallStatus {
    Completed,
    NoAnswer,
    Busy,
    Failed,
    Canceled,
    Unrecognized(String),
}

impl CallStatus {
    /// Parse the provider's wire value. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "completed" => CallStatus::Completed,
            "no-answer" => CallStatus::NoAnswer,
            "busy" => CallStatus::Busy,
            "failed" => CallStatus::Failed,
            "canceled" => CallStatus::Canceled,
            other => CallStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CallStatus::Completed => "completed",
            CallStatus::NoAnswer => "no-answer",
            CallStatus::Busy => "busy",
            CallStatus::Failed => "failed",
            CallStatus::Canceled => "canceled",
            CallStatus::Unrecognized(raw) => raw,
        }
    }

    /// The call never reached the patient
    pub fn is_unreached(&self) -> bool {
        matches!(
            self,
            CallStatus::NoAnswer | CallStatus::Busy | CallStatus::Failed
        )
    }

    /// Statuses the outbound call subscribes to in its status callback
    pub fn callback_events() -> [CallStatus; 5] {
        [
            CallStatus::Completed,
            CallStatus::NoAnswer,
            CallStatus::Busy,
            CallStatus::Failed,
            CallStatus::Canceled,
        ]
    }
}

impl From<String> for CallStatus {
    fn from(raw: String) -> Self {
        CallStatus::parse(&raw)
    }
}

impl From<CallStatus> for String {
    fn from(status: CallStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One status callback for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStatusEvent {
    pub call_id: String,
    /// Number that was dialled; may be absent on malformed callbacks
    pub destination: Option<String>,
    pub status: CallStatus,
}
