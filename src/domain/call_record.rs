//! Call record domain model
//!
//! One record is written per call when the provider posts the transcription
//! of the patient's recorded answer. Records are never updated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::shared::{DomainError, Result};

/// Stored in place of a transcription the provider could not produce
pub const NO_TRANSCRIPTION_PLACEHOLDER: &str = "No transcription available";

/// Stored call response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    /// Destination number of the reminder call
    pub phone_number: String,

    /// Provider-assigned call identifier, unique per record
    pub call_id: String,

    pub transcription: String,
    pub recording_url: String,

    /// Last known lifecycle outcome as reported by the provider
    pub call_status: String,

    pub timestamp: DateTime<Utc>,
}

impl CallRecord {
    /// Build a record from a transcription callback.
    ///
    /// Fails with a validation error when a required field is blank. A
    /// missing or empty transcription is replaced with
    /// [`NO_TRANSCRIPTION_PLACEHOLDER`].
    pub fn new(
        phone_number: String,
        call_id: String,
        transcription: Option<String>,
        call_status: String,
        recording_url: Option<String>,
    ) -> Result<Self> {
        require("phoneNumber", &phone_number)?;
        require("callId", &call_id)?;
        require("callStatus", &call_status)?;

        let transcription = transcription
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_TRANSCRIPTION_PLACEHOLDER.to_string());

        Ok(Self {
            phone_number,
            call_id,
            transcription,
            recording_url: recording_url.unwrap_or_default(),
            call_status,
            timestamp: Utc::now(),
        })
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::missing(field));
    }
    Ok(())
}

/// Call record store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with this call identifier already exists
    #[error("Unique constraint violation: call id {0} already stored")]
    UniqueConstraintViolation(String),

    /// Store unreachable or query failed
    #[error("Data access error: {0}")]
    DataAccess(String),
}

/// Call record store
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CallRecordStore: Send + Sync {
    /// Insert a new record; never overwrites an existing call id
    async fn insert(&self, record: &CallRecord) -> std::result::Result<(), StoreError>;

    /// Fetch every stored record
    async fn find_all(&self) -> std::result::Result<Vec<CallRecord>, StoreError>;
}
