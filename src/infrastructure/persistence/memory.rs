//! In-memory call record store
//!
//! Backs tests and the `memory` feature. Enforces the same call id
//! uniqueness as the database table.

use crate::domain::call_record::{CallRecord, CallRecordStore, StoreError};
use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct Inner {
    records: Vec<CallRecord>,
    call_ids: HashSet<String>,
}

#[derive(Default)]
pub struct InMemoryCallRecordStore {
    inner: RwLock<Inner>,
}

impl InMemoryCallRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

#[async_trait]
impl CallRecordStore for InMemoryCallRecordStore {
    async fn insert(&self, record: &CallRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.call_ids.insert(record.call_id.clone()) {
            return Err(StoreError::UniqueConstraintViolation(record.call_id.clone()));
        }
        inner.records.push(record.clone());
        debug!("Stored call record {} in memory", record.call_id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<CallRecord>, StoreError> {
        Ok(self.inner.read().await.records.clone())
    }
}
