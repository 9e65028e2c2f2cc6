//! Application layer - Use cases and application services
//!
//! This layer orchestrates domain objects to fulfill use cases.
//! It's responsible for:
//! - Dispatching call status callbacks
//! - Persisting and analyzing call responses
//! - Initiating outbound reminder calls

pub mod call_responses;
pub mod dispatcher;
pub mod outbound_call;

pub use call_responses::{CallResponseService, RecordTranscriptionError, TranscriptionInput};
pub use dispatcher::{CallStatusDispatcher, DispatchOutcome, FallbackOutcome};
pub use outbound_call::{InitiateCallError, OutboundCallService};
