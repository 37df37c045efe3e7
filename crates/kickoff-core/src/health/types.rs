use serde::Serialize;

/// Lossless outcome of one health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthStatus {
    /// The backend answered `{"status":"healthy"}`.
    Healthy,
    /// The backend answered, but not with a healthy status.
    Unhealthy { detail: String },
    /// The backend could not be asked at all.
    Unreachable { reason: String },
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// Health answer handed to callers that only need a yes/no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResult {
    pub healthy: bool,
}

impl From<&HealthStatus> for HealthResult {
    fn from(status: &HealthStatus) -> Self {
        HealthResult {
            healthy: status.is_healthy(),
        }
    }
}
