//! Interface layer - External interfaces
//!
//! This layer handles:
//! - Provider webhooks (status and transcription callbacks, TwiML prompts)
//! - REST endpoints for call initiation and response analysis
//! - Request/response formatting
//! - Metrics exposition

pub mod api;
