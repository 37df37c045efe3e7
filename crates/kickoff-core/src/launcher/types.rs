use std::path::PathBuf;

use serde::Serialize;

use kickoff_config::LauncherConfig;

/// One request to start the backend script through the target application.
///
/// Built fresh for every `start_backend` call and dropped once the platform
/// has accepted or refused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub target_app_id: String,
    /// Service inside the target app that handles the request (Android).
    pub service_component: Option<String>,
    /// Intent action, and prefix of the request's extra keys (Android).
    pub action: Option<String>,
    pub executable_path: PathBuf,
    pub working_directory: PathBuf,
    pub background: bool,
}

impl LaunchRequest {
    pub fn from_config(config: &LauncherConfig) -> Self {
        Self {
            target_app_id: config.target_app_id().to_string(),
            service_component: Some(config.service_component().to_string()),
            action: Some(config.action().to_string()),
            executable_path: config.script_path().to_path_buf(),
            working_directory: config.working_directory().to_path_buf(),
            background: config.background(),
        }
    }
}

/// Acknowledgement that a launch request was submitted.
///
/// `success` says nothing about whether the script itself ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchResult {
    pub success: bool,
    pub message: String,
}

impl LaunchResult {
    pub fn submitted(app_id: &str) -> Self {
        Self {
            success: true,
            message: format!("Backend start request submitted to {}", app_id),
        }
    }
}

/// Presence answer handed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstalledResult {
    pub installed: bool,
}

/// Metadata returned by a successful application lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub app_id: String,
    /// APK path on Android, resolved binary on a desktop host.
    pub location: Option<String>,
}

/// Lossless outcome of an application lookup.
///
/// The public [`InstalledResult`] collapses `NotInstalled` and
/// `LookupFailed` into `installed = false`; this keeps them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InstallStatus {
    Installed(AppInfo),
    NotInstalled,
    LookupFailed { reason: String },
}

impl InstallStatus {
    pub fn is_installed(&self) -> bool {
        matches!(self, InstallStatus::Installed(_))
    }
}

impl From<&InstallStatus> for InstalledResult {
    fn from(status: &InstallStatus) -> Self {
        InstalledResult {
            installed: status.is_installed(),
        }
    }
}
