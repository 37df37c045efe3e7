//! Registry for looking up platform backends.

use std::sync::{Arc, LazyLock};

use tracing::debug;

use kickoff_config::Platform;

use super::backends::{AndroidBackend, HostBackend};
use super::errors::LaunchError;
use super::traits::PlatformBackend;

/// Global registry of all supported platform backends.
static REGISTRY: LazyLock<PlatformRegistry> = LazyLock::new(PlatformRegistry::new);

/// Backends in detection order.
struct PlatformRegistry {
    backends: Vec<(Platform, Arc<dyn PlatformBackend>)>,
}

impl PlatformRegistry {
    fn new() -> Self {
        Self {
            backends: vec![
                (
                    Platform::Android,
                    Arc::new(AndroidBackend) as Arc<dyn PlatformBackend>,
                ),
                (Platform::Host, Arc::new(HostBackend) as Arc<dyn PlatformBackend>),
            ],
        }
    }

    fn get(&self, platform: Platform) -> Option<Arc<dyn PlatformBackend>> {
        self.backends
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, b)| Arc::clone(b))
    }

    fn detect(&self) -> Option<Arc<dyn PlatformBackend>> {
        self.backends
            .iter()
            .find(|(_, b)| b.is_available())
            .map(|(_, b)| Arc::clone(b))
    }
}

/// Get the backend registered for an explicit platform.
///
/// Returns `None` for [`Platform::Auto`]; use [`resolve_backend`] instead.
pub fn get_backend(platform: Platform) -> Option<Arc<dyn PlatformBackend>> {
    REGISTRY.get(platform)
}

/// Resolve the backend for a configured platform.
///
/// `Auto` picks the first available backend (Android, then host). An
/// explicit platform must be available in the running environment.
pub fn resolve_backend(platform: Platform) -> Result<Arc<dyn PlatformBackend>, LaunchError> {
    debug!(event = "core.platform.resolve_started", platform = %platform);

    let backend = match platform {
        Platform::Auto => REGISTRY.detect(),
        explicit => REGISTRY.get(explicit).filter(|b| b.is_available()),
    };

    match backend {
        Some(backend) => {
            debug!(
                event = "core.platform.resolve_completed",
                platform = %platform,
                backend = backend.name()
            );
            Ok(backend)
        }
        None => Err(LaunchError::BackendUnavailable {
            backend: platform.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_expected_backends() {
        let registry = PlatformRegistry::new();
        let names: Vec<&str> = registry.backends.iter().map(|(_, b)| b.name()).collect();
        assert_eq!(names, vec!["android", "host"]);
    }

    #[test]
    fn test_get_backend_names_match_platform() {
        for platform in [Platform::Android, Platform::Host] {
            let backend = get_backend(platform).unwrap();
            assert_eq!(backend.name(), platform.as_str());
        }
        assert!(get_backend(Platform::Auto).is_none());
    }

    #[test]
    fn test_resolve_host_always_succeeds() {
        let backend = resolve_backend(Platform::Host).unwrap();
        assert_eq!(backend.name(), "host");
    }

    #[test]
    fn test_resolve_auto_always_finds_a_backend() {
        // The host backend is the fallback, so auto never fails.
        assert!(resolve_backend(Platform::Auto).is_ok());
    }

    #[test]
    fn test_resolve_android_outside_android_is_unavailable() {
        if AndroidBackend.is_available() {
            return;
        }
        let err = resolve_backend(Platform::Android).err().unwrap();
        assert!(matches!(
            err,
            LaunchError::BackendUnavailable { ref backend } if backend == "android"
        ));
    }
}
