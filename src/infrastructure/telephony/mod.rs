//! Telephony provider integration

pub mod twilio;
pub mod twiml;

pub use twilio::TwilioClient;
pub use twiml::VoiceResponse;
