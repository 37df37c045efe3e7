//! Launcher error types.

use crate::errors::KickoffError;

/// Errors surfaced to callers of [`LauncherService`](super::LauncherService).
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Failed to start backend: {message}")]
    SubmissionFailed { app_id: String, message: String },

    #[error("Platform backend '{backend}' is not available in this environment")]
    BackendUnavailable { backend: String },
}

impl KickoffError for LaunchError {
    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::SubmissionFailed { .. } => "LAUNCH_SUBMISSION_FAILED",
            LaunchError::BackendUnavailable { .. } => "LAUNCH_BACKEND_UNAVAILABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, LaunchError::BackendUnavailable { .. })
    }
}

/// Failures reported by a [`PlatformBackend`](super::PlatformBackend).
///
/// These never reach callers directly; the service folds them into
/// [`LaunchError::SubmissionFailed`] or an absorbed lookup result.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Platform tool not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Request rejected: {message}")]
    Rejected { message: String },

    #[error("IO error talking to platform: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl PlatformError {
    /// Map a spawn failure for `tool` onto the narrowest variant.
    pub fn from_spawn(tool: &str, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => PlatformError::ToolNotFound {
                tool: tool.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => PlatformError::PermissionDenied {
                message: format!("{}: {}", tool, error),
            },
            _ => PlatformError::IoError { source: error },
        }
    }
}

impl KickoffError for PlatformError {
    fn error_code(&self) -> &'static str {
        match self {
            PlatformError::ToolNotFound { .. } => "PLATFORM_TOOL_NOT_FOUND",
            PlatformError::PermissionDenied { .. } => "PLATFORM_PERMISSION_DENIED",
            PlatformError::Rejected { .. } => "PLATFORM_REJECTED",
            PlatformError::IoError { .. } => "PLATFORM_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            PlatformError::ToolNotFound { .. } | PlatformError::PermissionDenied { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_failed() {
        let error = LaunchError::SubmissionFailed {
            app_id: "com.termux".to_string(),
            message: "Permission denied: not allowed to start service".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to start backend: Permission denied: not allowed to start service"
        );
        assert_eq!(error.error_code(), "LAUNCH_SUBMISSION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_backend_unavailable() {
        let error = LaunchError::BackendUnavailable {
            backend: "android".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Platform backend 'android' is not available in this environment"
        );
        assert_eq!(error.error_code(), "LAUNCH_BACKEND_UNAVAILABLE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_from_spawn_not_found() {
        let error = PlatformError::from_spawn(
            "am",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        );
        assert!(matches!(error, PlatformError::ToolNotFound { ref tool } if tool == "am"));
        assert_eq!(error.to_string(), "Platform tool not found: am");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_from_spawn_permission_denied() {
        let error = PlatformError::from_spawn(
            "/opt/start.sh",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(error.error_code(), "PLATFORM_PERMISSION_DENIED");
        assert!(error.to_string().contains("/opt/start.sh"));
    }

    #[test]
    fn test_from_spawn_other_is_io() {
        let error = PlatformError::from_spawn("am", std::io::Error::other("broken pipe"));
        assert_eq!(error.error_code(), "PLATFORM_IO_ERROR");
        assert!(!error.is_user_error());
    }
}
