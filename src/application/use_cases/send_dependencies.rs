use crate::application::dto::DependencyRequest;
use crate::config::Config;
use crate::dependency_report::domain::{Artifact, DependencyFile, DEPENDENCY_FILE_NAME};
use crate::dependency_report::services::{DependencyFileEncoder, DependencyFlattener, ScopeFilter};
use crate::ports::outbound::{
    DependencyFilePayload, GemnasiumApi, InventoryReader, ProgressReporter, RevisionInfo,
};
use crate::shared::error::GemnasiumError;
use crate::shared::Result;

/// SendDependenciesUseCase - Uploads the project's dependencies to Gemnasium
///
/// Artifacts in ignored scopes are left out of the upload.
pub struct SendDependenciesUseCase<IR, API, PR> {
    inventory_reader: IR,
    api: API,
    progress_reporter: PR,
}

impl<IR, API, PR> SendDependenciesUseCase<IR, API, PR>
where
    IR: InventoryReader,
    API: GemnasiumApi,
    PR: ProgressReporter,
{
    pub fn new(inventory_reader: IR, api: API, progress_reporter: PR) -> Self {
        Self {
            inventory_reader,
            api,
            progress_reporter,
        }
    }

    /// Sends the dependency file
    ///
    /// # Returns
    /// The SHA of the commit created by Gemnasium
    ///
    /// # Errors
    /// Returns an error if no project slug is configured, if the inventory
    /// cannot be read, or if the upload fails
    pub fn execute(&self, request: &DependencyRequest, config: &Config) -> Result<String> {
        let project_slug = config
            .project_slug()
            .ok_or_else(|| GemnasiumError::validation("please provide the projectSlug option"))?;

        let inventory = self.inventory_reader.read_inventory(&request.project_path)?;
        let artifacts = self.apply_scope_filter(inventory.artifacts, config);

        let records = DependencyFlattener::flatten(&artifacts, &inventory.direct_dependencies);
        let file = DependencyFile::new(records);
        self.progress_reporter.report(&format!(
            "📤 Sending {} dependencies to Gemnasium",
            file.dependency_count()
        ));

        let payload = DependencyFilePayload {
            path: DEPENDENCY_FILE_NAME.to_string(),
            content: DependencyFileEncoder::encode(&file)?,
        };
        let revision = RevisionInfo {
            branch: config.project_branch().map(str::to_string),
            revision: config.project_revision().map(str::to_string),
        };

        let commit_sha = self
            .api
            .upload_dependency_files(project_slug, &revision, &[payload])?;

        self.progress_reporter.report_completion(
            "Your project's dependencies have been successfully sent to Gemnasium and a new revision has been created:",
        );
        self.progress_reporter
            .report(&config.commit_url(project_slug, &commit_sha));

        Ok(commit_sha)
    }

    fn apply_scope_filter(&self, artifacts: Vec<Artifact>, config: &Config) -> Vec<Artifact> {
        let ignored_scopes = config.ignored_scope_list();
        let filter = ScopeFilter::new(&ignored_scopes);
        if filter.is_empty() {
            return artifacts;
        }

        let original_count = artifacts.len();
        let filtered = filter.filter_artifacts(artifacts);
        let excluded_count = original_count - filtered.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} artifact(s) in ignored scopes: {}",
                excluded_count,
                ignored_scopes.join(", ")
            ));
        }
        filtered
    }
}
