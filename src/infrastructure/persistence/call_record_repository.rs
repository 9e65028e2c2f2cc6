//! PostgreSQL implementation of the call record store

use crate::domain::call_record::{CallRecord, CallRecordStore, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

#[derive(FromRow)]
struct CallRecordRow {
    phone_number: String,
    call_id: String,
    transcription: String,
    recording_url: String,
    call_status: String,
    recorded_at: DateTime<Utc>,
}

impl From<CallRecordRow> for CallRecord {
    fn from(r: CallRecordRow) -> Self {
        CallRecord {
            phone_number: r.phone_number,
            call_id: r.call_id,
            transcription: r.transcription,
            recording_url: r.recording_url,
            call_status: r.call_status,
            timestamp: r.recorded_at,
        }
    }
}

pub struct PgCallRecordStore {
    pool: PgPool,
}

impl PgCallRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a driver error, keeping duplicate call ids distinguishable
fn map_insert_error(call_id: &str, e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::UniqueConstraintViolation(call_id.to_string())
        }
        _ => {
            error!("Failed to insert call record {}: {}", call_id, e);
            StoreError::DataAccess(e.to_string())
        }
    }
}

#[async_trait]
impl CallRecordStore for PgCallRecordStore {
    async fn insert(&self, record: &CallRecord) -> Result<(), StoreError> {
        debug!("Inserting call record for call_id: {}", record.call_id);

        sqlx::query(
            r#"
            INSERT INTO call_records (
                phone_number, call_id, transcription,
                recording_url, call_status, recorded_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&record.phone_number)
        .bind(&record.call_id)
        .bind(&record.transcription)
        .bind(&record.recording_url)
        .bind(&record.call_status)
        .bind(record.timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(&record.call_id, e))?;

        debug!("Call record stored: {}", record.call_id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<CallRecord>, StoreError> {
        debug!("Listing all call records");

        let rows = sqlx::query_as::<_, CallRecordRow>(
            r#"
            SELECT phone_number, call_id, transcription,
                   recording_url, call_status, recorded_at
            FROM call_records
            ORDER BY recorded_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list call records: {}", e);
            StoreError::DataAccess(e.to_string())
        })?;

        Ok(rows.into_iter().map(CallRecord::from).collect())
    }
}
