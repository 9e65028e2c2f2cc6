//! Call response use cases: store a transcription, list and analyze responses

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::call_record::{CallRecord, CallRecordStore, StoreError};
use crate::domain::classifier::ClassificationResult;
use crate::domain::shared::DomainError;

/// Fields of a transcription callback
#[derive(Debug, Clone, Default)]
pub struct TranscriptionInput {
    pub phone_number: Option<String>,
    pub call_id: Option<String>,
    pub transcription: Option<String>,
    pub call_status: Option<String>,
    pub recording_url: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordTranscriptionError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct CallResponseService {
    store: Arc<dyn CallRecordStore>,
}

impl CallResponseService {
    pub fn new(store: Arc<dyn CallRecordStore>) -> Self {
        Self { store }
    }

    /// Validate and persist one transcription callback
    pub async fn record_transcription(
        &self,
        input: TranscriptionInput,
    ) -> Result<CallRecord, RecordTranscriptionError> {
        let record = CallRecord::new(
            input.phone_number.unwrap_or_default(),
            input.call_id.unwrap_or_default(),
            input.transcription,
            input.call_status.unwrap_or_default(),
            input.recording_url,
        )?;

        self.store.insert(&record).await.map_err(|e| {
            error!("Failed to save transcription for {}: {}", record.call_id, e);
            e
        })?;

        info!("Transcription saved for call {}", record.call_id);
        debug!("Saved record: {:?}", record);
        Ok(record)
    }

    /// Every stored response
    pub async fn list(&self) -> Result<Vec<CallRecord>, StoreError> {
        self.store.find_all().await.map_err(|e| {
            error!("Error fetching responses: {}", e);
            e
        })
    }

    /// Classify every stored transcription. A failed fetch yields no counts.
    pub async fn analyze(&self) -> Result<ClassificationResult, StoreError> {
        let records = self.store.find_all().await.map_err(|e| {
            error!("Error analyzing responses: {}", e);
            e
        })?;

        let result = ClassificationResult::from_records(&records);
        info!(
            "Analyzed {} responses: {} confirmed, {} unclear",
            result.total_responses, result.confirmed_count, result.unclear_count
        );
        Ok(result)
    }
}
