pub mod backends;
pub mod detection;
pub mod errors;
pub mod registry;
pub mod service;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod traits;
pub mod types;

// Re-export public API
pub use backends::{AndroidBackend, HostBackend};
pub use detection::is_android_environment;
pub use errors::{LaunchError, PlatformError};
pub use registry::{get_backend, resolve_backend};
pub use service::LauncherService;
#[cfg(any(test, feature = "testing"))]
pub use testing::FakeBackend;
pub use traits::PlatformBackend;
pub use types::{AppInfo, InstallStatus, InstalledResult, LaunchRequest, LaunchResult};
