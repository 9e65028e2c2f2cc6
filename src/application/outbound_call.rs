//! Outbound reminder call initiation

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::shared::DomainError;
use crate::domain::telephony::{Caller, PlacedCall, TelephonyError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitiateCallError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Provider(#[from] TelephonyError),
}

pub struct OutboundCallService {
    caller: Arc<dyn Caller>,
}

impl OutboundCallService {
    pub fn new(caller: Arc<dyn Caller>) -> Self {
        Self { caller }
    }

    /// Place a reminder call. A blank number is rejected before the provider
    /// is contacted.
    pub async fn initiate(&self, phone_number: Option<&str>) -> Result<PlacedCall, InitiateCallError> {
        let phone_number = phone_number
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::ValidationError("Phone number is required".to_string()))?;

        let call = self.caller.place_call(phone_number).await.map_err(|e| {
            error!("Error making call to {}: {}", phone_number, e);
            e
        })?;

        info!("Call initiated - SID: {} to {}", call.sid, phone_number);
        Ok(call)
    }
}
