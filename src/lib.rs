//! medcall - Medication reminder call relay
//!
//! Places reminder calls through Twilio, stores the transcribed answers,
//! and classifies them as confirmed or unclear. Laid out as domain,
//! application, infrastructure and interface layers.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use domain::shared::error::DomainError;
pub use domain::shared::result::Result;
