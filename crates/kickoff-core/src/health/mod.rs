//! One-shot health check of the started backend.
//!
//! A single GET against the backend's health endpoint. No polling or
//! waiting; callers decide when to ask again.

mod errors;
mod handler;
mod types;

pub use errors::HealthError;
pub use handler::{DEFAULT_HEALTH_TIMEOUT, check_backend_health};
pub use types::{HealthResult, HealthStatus};
