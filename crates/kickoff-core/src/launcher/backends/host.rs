//! Desktop host backend: spawns the target program directly.

use std::process::{Child, Command, Stdio};

use tracing::{debug, info};

use crate::launcher::errors::PlatformError;
use crate::launcher::traits::PlatformBackend;
use crate::launcher::types::{AppInfo, LaunchRequest};

/// Host backend: runs `<target_app_id> <script>` in the working directory.
///
/// The target is usually an interpreter such as `bash`. Presence is a
/// `PATH` lookup.
pub struct HostBackend;

impl PlatformBackend for HostBackend {
    fn name(&self) -> &'static str {
        "host"
    }

    fn display_name(&self) -> &'static str {
        "Desktop host"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn submit(&self, request: &LaunchRequest) -> Result<(), PlatformError> {
        if !request.working_directory.is_dir() {
            return Err(PlatformError::Rejected {
                message: format!(
                    "working directory '{}' does not exist",
                    request.working_directory.display()
                ),
            });
        }

        let mut command = Command::new(&request.target_app_id);
        command
            .arg(&request.executable_path)
            .current_dir(&request.working_directory);

        if request.background {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
            detach(&mut command);
        }

        let mut child = command
            .spawn()
            .map_err(|e| PlatformError::from_spawn(&request.target_app_id, e))?;
        let pid = child.id();

        // Reap only; the exit status is never reported.
        std::thread::spawn(move || reap(&mut child, pid));

        info!(
            event = "core.platform.host.submit_completed",
            program = %request.target_app_id,
            script = %request.executable_path.display(),
            pid = pid,
            background = request.background
        );
        Ok(())
    }

    fn lookup_app(&self, app_id: &str) -> Result<Option<AppInfo>, PlatformError> {
        match which::which(app_id) {
            Ok(path) => Ok(Some(AppInfo {
                app_id: app_id.to_string(),
                location: Some(path.display().to_string()),
            })),
            Err(which::Error::CannotFindBinaryPath) => {
                debug!(event = "core.platform.host.lookup_not_found", app_id = app_id);
                Ok(None)
            }
            Err(e) => Err(PlatformError::Rejected {
                message: format!("PATH lookup for '{}' failed: {}", app_id, e),
            }),
        }
    }
}

fn reap(child: &mut Child, pid: u32) {
    if let Err(e) = child.wait() {
        debug!(
            event = "core.platform.host.reap_failed",
            pid = pid,
            error = %e
        );
    }
}

/// Put the child in its own process group so it outlives our session.
#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(not(unix))]
fn detach(_command: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn request(program: &str, script: PathBuf, workdir: PathBuf) -> LaunchRequest {
        LaunchRequest {
            target_app_id: program.to_string(),
            service_component: None,
            action: None,
            executable_path: script,
            working_directory: workdir,
            background: true,
        }
    }

    #[test]
    fn test_host_backend_is_always_available() {
        let backend = HostBackend;
        assert_eq!(backend.name(), "host");
        assert!(backend.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn test_submit_succeeds_even_when_script_fails() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("start.sh");
        std::fs::write(&script, "exit 3\n").unwrap();

        let result = HostBackend.submit(&request("sh", script, dir.path().to_path_buf()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_submit_missing_program_is_tool_not_found() {
        let dir = TempDir::new().unwrap();
        let err = HostBackend
            .submit(&request(
                "kickoff-no-such-program-12345",
                dir.path().join("start.sh"),
                dir.path().to_path_buf(),
            ))
            .unwrap_err();
        assert!(matches!(err, PlatformError::ToolNotFound { .. }));
    }

    #[test]
    fn test_submit_missing_workdir_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = HostBackend
            .submit(&request(
                "sh",
                dir.path().join("start.sh"),
                dir.path().join("gone"),
            ))
            .unwrap_err();
        assert!(matches!(err, PlatformError::Rejected { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_lookup_finds_sh() {
        let info = HostBackend.lookup_app("sh").unwrap().unwrap();
        assert_eq!(info.app_id, "sh");
        assert!(info.location.is_some());
    }

    #[test]
    fn test_lookup_missing_program_is_none() {
        let result = HostBackend.lookup_app("kickoff-no-such-program-12345").unwrap();
        assert!(result.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_reap_twice_does_not_panic() {
        let mut child = Command::new("sh").arg("-c").arg("exit 0").spawn().unwrap();
        let pid = child.id();
        reap(&mut child, pid);
        // Second wait returns the cached status.
        reap(&mut child, pid);
    }
}
