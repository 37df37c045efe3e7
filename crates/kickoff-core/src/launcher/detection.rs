//! Environment detection utilities.

use std::path::Path;

const TERMUX_DATA_DIR: &str = "/data/data/com.termux";

/// Check whether we are running on Android alongside Termux.
///
/// True when `TERMUX_VERSION` is set, when `PREFIX` points into the Termux
/// tree, or when the Termux data directory exists.
pub fn is_android_environment() -> bool {
    let termux_version = std::env::var("TERMUX_VERSION").ok();
    let prefix = std::env::var("PREFIX").ok();

    has_android_markers(
        termux_version.as_deref(),
        prefix.as_deref(),
        Path::new(TERMUX_DATA_DIR).exists(),
    )
}

fn has_android_markers(
    termux_version: Option<&str>,
    prefix: Option<&str>,
    termux_data_dir_exists: bool,
) -> bool {
    termux_version.is_some_and(|v| !v.is_empty())
        || prefix.is_some_and(|p| p.contains("com.termux"))
        || termux_data_dir_exists
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_none() {
        assert!(!has_android_markers(None, None, false));
        assert!(!has_android_markers(Some(""), Some("/usr"), false));
    }

    #[test]
    fn test_markers_termux_version() {
        assert!(has_android_markers(Some("0.118.0"), None, false));
    }

    #[test]
    fn test_markers_prefix() {
        assert!(has_android_markers(
            None,
            Some("/data/data/com.termux/files/usr"),
            false
        ));
    }

    #[test]
    fn test_markers_data_dir() {
        assert!(has_android_markers(None, None, true));
    }

    #[test]
    fn test_env_termux_version_detected() {
        temp_env::with_vars(
            [
                ("TERMUX_VERSION", Some("0.118.0")),
                ("PREFIX", None::<&str>),
            ],
            || {
                assert!(is_android_environment());
            },
        );
    }

    #[test]
    fn test_env_without_markers() {
        if Path::new(TERMUX_DATA_DIR).exists() {
            return;
        }
        temp_env::with_vars(
            [("TERMUX_VERSION", None::<&str>), ("PREFIX", Some("/usr/local"))],
            || {
                assert!(!is_android_environment());
            },
        );
    }
}
