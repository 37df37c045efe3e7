//! Platform backend trait definition.

use crate::launcher::errors::PlatformError;
use crate::launcher::types::{AppInfo, LaunchRequest};

/// The platform primitives the launcher relies on.
///
/// Each supported platform (Android, desktop host) implements this trait.
/// Implementations report failures as [`PlatformError`] and never panic;
/// the service turns those into caller-facing results.
pub trait PlatformBackend: Send + Sync {
    /// The canonical name of this backend (e.g., "android", "host").
    fn name(&self) -> &'static str;

    /// The display name for this backend.
    fn display_name(&self) -> &'static str;

    /// Check if this backend can be used in the running environment.
    fn is_available(&self) -> bool;

    /// Hand a launch request to the platform and return once it is accepted.
    ///
    /// Must not wait for the launched process.
    fn submit(&self, request: &LaunchRequest) -> Result<(), PlatformError>;

    /// Look up installed application metadata.
    ///
    /// `Ok(None)` means the platform answered and the app is not registered;
    /// `Err` means the platform could not answer.
    fn lookup_app(&self, app_id: &str) -> Result<Option<AppInfo>, PlatformError>;
}
