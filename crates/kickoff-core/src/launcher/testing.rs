//! In-memory platform backend for tests.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for callers that want to exercise a `LauncherService` without a device.

use std::collections::HashSet;
use std::sync::Mutex;

use super::errors::PlatformError;
use super::traits::PlatformBackend;
use super::types::{AppInfo, LaunchRequest};

/// Scriptable backend: records submissions and never executes anything.
#[derive(Debug, Default)]
pub struct FakeBackend {
    installed: HashSet<String>,
    submit_failure: Option<String>,
    lookup_failure: Option<String>,
    submissions: Mutex<Vec<LaunchRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an application as installed.
    pub fn with_installed(mut self, app_id: &str) -> Self {
        self.installed.insert(app_id.to_string());
        self
    }

    /// Make every submission fail with `message`.
    pub fn failing_submit(mut self, message: &str) -> Self {
        self.submit_failure = Some(message.to_string());
        self
    }

    /// Make every lookup fail with `message`.
    pub fn failing_lookup(mut self, message: &str) -> Self {
        self.lookup_failure = Some(message.to_string());
        self
    }

    /// Requests accepted so far, in submission order.
    pub fn submissions(&self) -> Vec<LaunchRequest> {
        self.submissions
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl PlatformBackend for FakeBackend {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn display_name(&self) -> &'static str {
        "Fake platform"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn submit(&self, request: &LaunchRequest) -> Result<(), PlatformError> {
        if let Some(message) = &self.submit_failure {
            return Err(PlatformError::Rejected {
                message: message.clone(),
            });
        }
        if let Ok(mut submissions) = self.submissions.lock() {
            submissions.push(request.clone());
        }
        Ok(())
    }

    fn lookup_app(&self, app_id: &str) -> Result<Option<AppInfo>, PlatformError> {
        if let Some(message) = &self.lookup_failure {
            return Err(PlatformError::IoError {
                source: std::io::Error::other(message.clone()),
            });
        }
        Ok(self.installed.contains(app_id).then(|| AppInfo {
            app_id: app_id.to_string(),
            location: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kickoff_config::LauncherConfig;

    #[test]
    fn test_fake_records_submissions() {
        let fake = FakeBackend::new();
        let request = LaunchRequest::from_config(&LauncherConfig::default());
        fake.submit(&request).unwrap();
        assert_eq!(fake.submission_count(), 1);
        assert_eq!(fake.submissions()[0], request);
    }

    #[test]
    fn test_fake_failing_submit_records_nothing() {
        let fake = FakeBackend::new().failing_submit("boom");
        let request = LaunchRequest::from_config(&LauncherConfig::default());
        assert!(fake.submit(&request).is_err());
        assert_eq!(fake.submission_count(), 0);
    }

    #[test]
    fn test_fake_lookup() {
        let fake = FakeBackend::new().with_installed("com.termux");
        assert!(fake.lookup_app("com.termux").unwrap().is_some());
        assert!(fake.lookup_app("org.other").unwrap().is_none());

        let broken = FakeBackend::new().failing_lookup("registry offline");
        assert!(broken.lookup_app("com.termux").is_err());
    }
}
