use crate::errors::ConfigError;
use crate::types::KickoffConfig;

/// Check that a resolved configuration can produce a launch request.
pub fn validate_config(config: &KickoffConfig) -> Result<(), ConfigError> {
    let launcher = &config.launcher;

    if launcher.target_app_id().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "launcher.target_app_id cannot be empty".to_string(),
        });
    }

    if let Some(service) = &launcher.service_component
        && service.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "launcher.service_component cannot be empty when set".to_string(),
        });
    }

    if let Some(action) = &launcher.action
        && action.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "launcher.action cannot be empty when set".to_string(),
        });
    }

    if !launcher.script_path().is_absolute() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "launcher.script_path must be absolute, got '{}'",
                launcher.script_path().display()
            ),
        });
    }

    if !launcher.working_directory().is_absolute() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "launcher.working_directory must be absolute, got '{}'",
                launcher.working_directory().display()
            ),
        });
    }

    if !launcher.health_url().starts_with("http://") {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "launcher.health_url must be a plain http:// URL, got '{}'",
                launcher.health_url()
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LauncherConfig;
    use std::path::PathBuf;

    fn with(launcher: LauncherConfig) -> KickoffConfig {
        KickoffConfig { launcher }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&KickoffConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_target_rejected() {
        let config = with(LauncherConfig {
            target_app_id: Some("  ".to_string()),
            ..Default::default()
        });
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("target_app_id cannot be empty"));
    }

    #[test]
    fn test_blank_action_rejected() {
        let config = with(LauncherConfig {
            action: Some(String::new()),
            ..Default::default()
        });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_relative_working_directory_rejected() {
        let config = with(LauncherConfig {
            working_directory: Some(PathBuf::from("pkn")),
            ..Default::default()
        });
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("working_directory must be absolute"));
    }

    #[test]
    fn test_https_health_url_rejected() {
        let config = with(LauncherConfig {
            health_url: Some("https://localhost:8010/health".to_string()),
            ..Default::default()
        });
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("health_url"));
    }
}
