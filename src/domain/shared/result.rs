//! Domain result type

use super::error::DomainError;

/// Result of validating or constructing domain values
pub type Result<T> = std::result::Result<T, DomainError>;
