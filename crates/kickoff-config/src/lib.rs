//! Configuration for kickoff.
//!
//! Holds the launch target (which external application receives the start
//! request, and the script it should run) plus the platform selection.
//! Configuration is read once at construction time and never re-derived.

mod errors;
mod loading;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loading::{
    load_config, load_config_from, merge_configs, project_config_path, user_config_path,
};
pub use types::{
    DEFAULT_ACTION, DEFAULT_HEALTH_URL, DEFAULT_SCRIPT_PATH, DEFAULT_SERVICE_COMPONENT,
    DEFAULT_TARGET_APP_ID, DEFAULT_WORKING_DIRECTORY, KickoffConfig, LauncherConfig, Platform,
};
pub use validation::validate_config;
