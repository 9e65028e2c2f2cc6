//! Domain layer - Core business logic and rules
//!
//! This layer contains:
//! - Call records and the store port
//! - Provider call statuses
//! - Transcript classification
//! - Telephony capability ports

pub mod call_record;
pub mod call_status;
pub mod classifier;
pub mod shared;
pub mod telephony;

// Re-export commonly used types
pub use call_record::{CallRecord, CallRecordStore, StoreError};
pub use call_status::{CallStatus, CallStatusEvent};
pub use classifier::{classify, Classification, ClassificationResult};
pub use shared::{DomainError, Result};
pub use telephony::{Caller, Notifier, PlacedCall, TelephonyError};
