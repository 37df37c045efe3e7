use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_TARGET_APP_ID: &str = "com.termux";
pub const DEFAULT_SERVICE_COMPONENT: &str = "com.termux.app.RunCommandService";
pub const DEFAULT_ACTION: &str = "com.termux.RUN_COMMAND";
pub const DEFAULT_SCRIPT_PATH: &str = "/data/data/com.termux/files/home/pkn/termux_start.sh";
pub const DEFAULT_WORKING_DIRECTORY: &str = "/data/data/com.termux/files/home/pkn";
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:8010/health";

/// Which platform backend handles launch requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Detect from the running environment.
    #[default]
    Auto,
    /// Android, talking to the target app through `am` and `pm`.
    Android,
    /// A desktop host, spawning the target program directly.
    Host,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Auto => "auto",
            Platform::Android => "android",
            Platform::Host => "host",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Platform::Auto),
            "android" | "termux" => Ok(Platform::Android),
            "host" | "pc" | "desktop" => Ok(Platform::Host),
            _ => Err(ConfigError::InvalidPlatform {
                platform: s.to_string(),
            }),
        }
    }
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KickoffConfig {
    #[serde(default)]
    pub launcher: LauncherConfig,
}

/// The `[launcher]` table.
///
/// Every field is optional on disk so that config layers can override
/// individual values. Use the accessor methods to read resolved values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Identifier of the external application that receives the start request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_app_id: Option<String>,

    /// Service inside the target app that handles the request (Android only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_component: Option<String>,

    /// Intent action; also the prefix of the request's extra keys (Android only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<PathBuf>,

    /// Run the script detached from any foreground UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Endpoint the started backend answers `{"status":"healthy"}` on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_url: Option<String>,
}

impl LauncherConfig {
    pub fn target_app_id(&self) -> &str {
        self.target_app_id.as_deref().unwrap_or(DEFAULT_TARGET_APP_ID)
    }

    pub fn service_component(&self) -> &str {
        self.service_component
            .as_deref()
            .unwrap_or(DEFAULT_SERVICE_COMPONENT)
    }

    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or(DEFAULT_ACTION)
    }

    pub fn script_path(&self) -> &Path {
        self.script_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_SCRIPT_PATH))
    }

    pub fn working_directory(&self) -> &Path {
        self.working_directory
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_WORKING_DIRECTORY))
    }

    pub fn background(&self) -> bool {
        self.background.unwrap_or(true)
    }

    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_default()
    }

    pub fn health_url(&self) -> &str {
        self.health_url.as_deref().unwrap_or(DEFAULT_HEALTH_URL)
    }
}
