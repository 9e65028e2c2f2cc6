//! API interface implementations

pub mod call_dto;
pub mod metrics_handler;
pub mod response_handler;
pub mod router;
pub mod state;
pub mod voice_handler;

pub use call_dto::ApiError;
pub use metrics_handler::init_metrics;
pub use router::build_router;
pub use state::AppState;
