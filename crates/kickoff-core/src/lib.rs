//! Core library for kickoff.
//!
//! Asks an external application to start a background backend script and
//! reports whether that application is installed. The platform work (the
//! Android activity/package managers, or a plain process spawn on a desktop
//! host) sits behind [`launcher::PlatformBackend`].

pub mod errors;
pub mod health;
pub mod launcher;
pub mod logging;

pub use errors::{KickoffError, KickoffResult};
pub use health::{HealthResult, HealthStatus, check_backend_health};
pub use launcher::{
    AppInfo, InstallStatus, InstalledResult, LaunchError, LaunchRequest, LaunchResult,
    LauncherService, PlatformBackend, PlatformError,
};
pub use logging::init_logging;

pub use kickoff_config::{KickoffConfig, LauncherConfig, Platform};
