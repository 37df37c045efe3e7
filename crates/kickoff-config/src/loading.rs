use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::types::{KickoffConfig, LauncherConfig};
use crate::validation::validate_config;

const CONFIG_DIR: &str = ".kickoff";
const CONFIG_FILE: &str = "config.toml";

/// Path of the user-level config file (`~/.kickoff/config.toml`).
///
/// Returns `None` when the home directory cannot be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Path of the project-level config file (`./.kickoff/config.toml`).
pub fn project_config_path() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load configuration from defaults, the user file, then the project file.
///
/// Later layers override earlier ones field by field. Missing files are
/// skipped; files that exist but cannot be read or parsed are errors.
pub fn load_config() -> Result<KickoffConfig, ConfigError> {
    let mut layers = Vec::new();
    if let Some(user) = user_config_path() {
        layers.push(user);
    }
    layers.push(project_config_path());

    load_layers(&layers)
}

/// Load and validate a single explicit config file.
pub fn load_config_from(path: &Path) -> Result<KickoffConfig, ConfigError> {
    info!(event = "config.load_started", path = %path.display());

    if !path.exists() {
        return Err(ConfigError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }

    let config = read_config_file(path)?;
    validate_config(&config)?;

    info!(event = "config.load_completed", path = %path.display());
    Ok(config)
}

fn load_layers(paths: &[PathBuf]) -> Result<KickoffConfig, ConfigError> {
    info!(event = "config.load_started", layers = paths.len());

    let mut config = KickoffConfig::default();
    for path in paths {
        if !path.exists() {
            debug!(event = "config.layer_skipped", path = %path.display());
            continue;
        }

        let layer = read_config_file(path)?;
        config = merge_configs(config, layer);
        debug!(event = "config.layer_applied", path = %path.display());
    }

    validate_config(&config)?;

    info!(
        event = "config.load_completed",
        target_app_id = config.launcher.target_app_id(),
        platform = %config.launcher.platform()
    );
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<KickoffConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("{}: {}", path.display(), e),
    })
}

/// Merge two configs; any field set in `override_config` wins.
pub fn merge_configs(base: KickoffConfig, override_config: KickoffConfig) -> KickoffConfig {
    KickoffConfig {
        launcher: merge_launcher(base.launcher, override_config.launcher),
    }
}

fn merge_launcher(base: LauncherConfig, over: LauncherConfig) -> LauncherConfig {
    LauncherConfig {
        target_app_id: over.target_app_id.or(base.target_app_id),
        service_component: over.service_component.or(base.service_component),
        action: over.action.or(base.action),
        script_path: over.script_path.or(base.script_path),
        working_directory: over.working_directory.or(base.working_directory),
        background: over.background.or(base.background),
        platform: over.platform.or(base.platform),
        health_url: over.health_url.or(base.health_url),
    }
}
