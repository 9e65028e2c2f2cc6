//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - Call record store implementations
//! - Telephony provider client and TwiML rendering

pub mod persistence;
pub mod telephony;
