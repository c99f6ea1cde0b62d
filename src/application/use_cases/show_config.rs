use crate::config::Config;
use crate::ports::outbound::ProgressReporter;

/// ShowConfigUseCase - Reports the resolved configuration
///
/// The API key is masked.
pub struct ShowConfigUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> ShowConfigUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    pub fn execute(&self, config: &Config) {
        let entries = [
            ("baseUrl", Some(config.base_url().to_string())),
            ("apiKey", config.masked_api_key()),
            ("projectBranch", config.project_branch().map(str::to_string)),
            ("projectSlug", config.project_slug().map(str::to_string)),
            ("projectRevision", config.project_revision().map(str::to_string)),
            ("ignoredScopes", config.ignored_scopes().map(str::to_string)),
            ("apiBaseUrl", Some(config.api_base_url())),
            ("uiBaseUrl", Some(config.ui_base_url().to_string())),
        ];

        for (key, value) in entries {
            self.progress_reporter.report(&format!(
                "{}: {}",
                key,
                value.as_deref().unwrap_or("")
            ));
        }
    }
}
