use std::sync::Arc;

use tracing::{error, info, warn};

use kickoff_config::{ConfigError, KickoffConfig, LauncherConfig, load_config, validate_config};

use crate::errors::{KickoffError, KickoffResult};
use crate::health::{DEFAULT_HEALTH_TIMEOUT, HealthStatus, check_backend_health};

use super::errors::LaunchError;
use super::registry::resolve_backend;
use super::traits::PlatformBackend;
use super::types::{InstallStatus, InstalledResult, LaunchRequest, LaunchResult};

/// Starts the backend script through the target application and reports
/// whether that application is installed.
///
/// Holds no mutable state; every method takes `&self` and calls may run
/// concurrently from any thread.
pub struct LauncherService {
    config: LauncherConfig,
    backend: Arc<dyn PlatformBackend>,
}

impl LauncherService {
    /// Build a service over an explicit backend.
    pub fn new(
        config: KickoffConfig,
        backend: Arc<dyn PlatformBackend>,
    ) -> Result<Self, ConfigError> {
        validate_config(&config)?;

        info!(
            event = "core.launcher.created",
            backend = backend.name(),
            target_app_id = config.launcher.target_app_id()
        );

        Ok(Self {
            config: config.launcher,
            backend,
        })
    }

    /// Build a service, picking the backend from the configured platform.
    pub fn from_config(config: KickoffConfig) -> KickoffResult<Self> {
        let backend = resolve_backend(config.launcher.platform())
            .map_err(|e| Box::new(e) as Box<dyn KickoffError>)?;
        Self::new(config, backend).map_err(|e| Box::new(e) as Box<dyn KickoffError>)
    }

    /// Load the layered config files and build a service from them.
    pub fn load() -> KickoffResult<Self> {
        let config = load_config().map_err(|e| Box::new(e) as Box<dyn KickoffError>)?;
        Self::from_config(config)
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Ask the target application to start the backend script.
    ///
    /// Returns as soon as the platform accepts the request; the script's own
    /// outcome is never observed. Failures are not retried.
    pub fn start_backend(&self) -> Result<LaunchResult, LaunchError> {
        let request = LaunchRequest::from_config(&self.config);

        info!(
            event = "core.launcher.start_started",
            backend = self.backend.name(),
            app_id = %request.target_app_id,
            script = %request.executable_path.display()
        );

        match self.backend.submit(&request) {
            Ok(()) => {
                info!(
                    event = "core.launcher.start_completed",
                    app_id = %request.target_app_id
                );
                Ok(LaunchResult::submitted(&request.target_app_id))
            }
            Err(e) => {
                error!(
                    event = "core.launcher.start_failed",
                    app_id = %request.target_app_id,
                    error_code = e.error_code(),
                    error = %e
                );
                Err(LaunchError::SubmissionFailed {
                    app_id: request.target_app_id,
                    message: e.to_string(),
                })
            }
        }
    }

    /// Ask the configured health endpoint once whether the backend is up.
    ///
    /// No polling or retry; call again to re-check.
    pub fn check_backend_health(&self) -> HealthStatus {
        check_backend_health(self.config.health_url(), DEFAULT_HEALTH_TIMEOUT)
    }

    /// Report whether `app_id` is installed.
    ///
    /// Lookup failures read as not installed; use [`install_status`] to tell
    /// them apart.
    ///
    /// [`install_status`]: LauncherService::install_status
    pub fn check_installed(&self, app_id: &str) -> InstalledResult {
        InstalledResult::from(&self.install_status(app_id))
    }

    /// Whether the configured target application is installed.
    pub fn check_target_installed(&self) -> InstalledResult {
        self.check_installed(self.config.target_app_id())
    }

    /// Look up `app_id`, keeping the reason when the lookup itself fails.
    pub fn install_status(&self, app_id: &str) -> InstallStatus {
        if app_id.trim().is_empty() {
            warn!(event = "core.launcher.lookup_failed", reason = "empty app id");
            return InstallStatus::LookupFailed {
                reason: "app id cannot be empty".to_string(),
            };
        }

        match self.backend.lookup_app(app_id) {
            Ok(Some(info)) => {
                info!(
                    event = "core.launcher.lookup_completed",
                    app_id = app_id,
                    installed = true
                );
                InstallStatus::Installed(info)
            }
            Ok(None) => {
                info!(
                    event = "core.launcher.lookup_completed",
                    app_id = app_id,
                    installed = false
                );
                InstallStatus::NotInstalled
            }
            Err(e) => {
                warn!(
                    event = "core.launcher.lookup_failed",
                    app_id = app_id,
                    error_code = e.error_code(),
                    error = %e
                );
                InstallStatus::LookupFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
