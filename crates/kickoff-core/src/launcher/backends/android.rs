//! Android backend using the activity manager (`am`) and package manager (`pm`).

use std::process::Command;

use tracing::{debug, info, warn};

use crate::launcher::detection::is_android_environment;
use crate::launcher::errors::PlatformError;
use crate::launcher::traits::PlatformBackend;
use crate::launcher::types::{AppInfo, LaunchRequest};

const ACTIVITY_MANAGER: &str = "am";
const PACKAGE_MANAGER: &str = "pm";

/// Android backend: sends a start-service intent to the target app.
pub struct AndroidBackend;

impl PlatformBackend for AndroidBackend {
    fn name(&self) -> &'static str {
        "android"
    }

    fn display_name(&self) -> &'static str {
        "Android (am/pm)"
    }

    fn is_available(&self) -> bool {
        is_android_environment() && which::which(ACTIVITY_MANAGER).is_ok()
    }

    fn submit(&self, request: &LaunchRequest) -> Result<(), PlatformError> {
        let args = build_start_service_args(request)?;

        debug!(
            event = "core.platform.android.submit_started",
            app_id = %request.target_app_id,
            script = %request.executable_path.display(),
            background = request.background
        );

        let output = Command::new(ACTIVITY_MANAGER)
            .args(&args)
            .output()
            .map_err(|e| PlatformError::from_spawn(ACTIVITY_MANAGER, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        check_am_output(output.status.code(), &stdout, &stderr)?;

        info!(
            event = "core.platform.android.submit_completed",
            app_id = %request.target_app_id
        );
        Ok(())
    }

    fn lookup_app(&self, app_id: &str) -> Result<Option<AppInfo>, PlatformError> {
        lookup_with(PACKAGE_MANAGER, app_id)
    }
}

/// Run `<program> path <app_id>` and classify the answer.
fn lookup_with(program: &str, app_id: &str) -> Result<Option<AppInfo>, PlatformError> {
    let output = Command::new(program)
        .arg("path")
        .arg(app_id)
        .output()
        .map_err(|e| PlatformError::from_spawn(program, e))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    match check_pm_output(output.status.code(), &stdout, &stderr) {
        Ok(Some(location)) => Ok(Some(AppInfo {
            app_id: app_id.to_string(),
            location: Some(location),
        })),
        Ok(None) => {
            debug!(
                event = "core.platform.android.lookup_not_found",
                app_id = app_id,
                exit_code = ?output.status.code()
            );
            Ok(None)
        }
        Err(e) => {
            warn!(
                event = "core.platform.android.lookup_failed",
                app_id = app_id,
                exit_code = ?output.status.code(),
                stderr = %stderr.trim()
            );
            Err(e)
        }
    }
}

/// Build the `am startservice` argument list for a request.
///
/// Extra keys are derived from the action, which is how Termux names them
/// (`com.termux.RUN_COMMAND` -> `com.termux.RUN_COMMAND_PATH`, ...).
fn build_start_service_args(request: &LaunchRequest) -> Result<Vec<String>, PlatformError> {
    let service = request
        .service_component
        .as_deref()
        .ok_or_else(|| PlatformError::Rejected {
            message: "Android launch requests need a service component".to_string(),
        })?;
    let action = request
        .action
        .as_deref()
        .ok_or_else(|| PlatformError::Rejected {
            message: "Android launch requests need an intent action".to_string(),
        })?;

    Ok(vec![
        "startservice".to_string(),
        "--user".to_string(),
        "0".to_string(),
        "-n".to_string(),
        format!("{}/{}", request.target_app_id, service),
        "-a".to_string(),
        action.to_string(),
        "--es".to_string(),
        format!("{}_PATH", action),
        request.executable_path.display().to_string(),
        "--es".to_string(),
        format!("{}_WORKDIR", action),
        request.working_directory.display().to_string(),
        "--ez".to_string(),
        format!("{}_BACKGROUND", action),
        request.background.to_string(),
    ])
}

/// Interpret `am` output.
///
/// Some `am` builds print `Error: ...` and still exit 0, so the output is
/// checked before the exit code.
fn check_am_output(
    exit_code: Option<i32>,
    stdout: &str,
    stderr: &str,
) -> Result<(), PlatformError> {
    if let Some(line) = failure_line(stdout).or_else(|| failure_line(stderr)) {
        return Err(classify_failure(line));
    }

    match exit_code {
        Some(0) => Ok(()),
        Some(code) => Err(PlatformError::Rejected {
            message: format!("am exited with code {}: {}", code, stderr.trim()),
        }),
        None => Err(PlatformError::Rejected {
            message: "am terminated by signal".to_string(),
        }),
    }
}

fn failure_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).find(|line| {
        line.starts_with("Error")
            || line.contains("Exception")
            || line.contains("Permission Denial")
    })
}

fn classify_failure(line: &str) -> PlatformError {
    if line.contains("SecurityException") || line.contains("Permission Denial") {
        PlatformError::PermissionDenied {
            message: line.to_string(),
        }
    } else {
        PlatformError::Rejected {
            message: line.to_string(),
        }
    }
}

/// Extract the first APK path from `pm path` output (`package:/data/app/...`).
fn parse_pm_path_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .filter_map(|line| line.trim().strip_prefix("package:"))
        .map(str::trim)
        .find(|path| !path.is_empty())
        .map(String::from)
}

/// Interpret `pm path` output.
///
/// A `package:` line means installed. A normal exit with nothing on stderr
/// means not installed. Anything else (signal, stderr noise) is a failed
/// lookup, not an absent package.
fn check_pm_output(
    exit_code: Option<i32>,
    stdout: &str,
    stderr: &str,
) -> Result<Option<String>, PlatformError> {
    if let Some(location) = parse_pm_path_output(stdout) {
        return Ok(Some(location));
    }

    let Some(code) = exit_code else {
        return Err(PlatformError::Rejected {
            message: "pm terminated by signal".to_string(),
        });
    };

    if let Some(line) = failure_line(stderr) {
        return Err(classify_failure(line));
    }

    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return Err(PlatformError::Rejected {
            message: format!("pm exited with code {}: {}", code, stderr),
        });
    }

    Ok(None)
}
