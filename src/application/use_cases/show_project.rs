use crate::config::Config;
use crate::ports::outbound::{GemnasiumApi, ProgressReporter, ProjectInfo};
use crate::shared::error::GemnasiumError;
use crate::shared::Result;

/// ShowProjectUseCase - Reports the attributes of the configured project
pub struct ShowProjectUseCase<API, PR> {
    api: API,
    progress_reporter: PR,
}

impl<API, PR> ShowProjectUseCase<API, PR>
where
    API: GemnasiumApi,
    PR: ProgressReporter,
{
    pub fn new(api: API, progress_reporter: PR) -> Self {
        Self {
            api,
            progress_reporter,
        }
    }

    pub fn execute(&self, config: &Config) -> Result<ProjectInfo> {
        let project_slug = config
            .project_slug()
            .ok_or_else(|| GemnasiumError::validation("please provide the projectSlug option"))?;

        let project = self.api.fetch_project(project_slug)?;

        self.progress_reporter
            .report(&format!("Project Info for: {}", project.name));
        self.progress_reporter.report("");
        self.progress_reporter
            .report(&format!("\t slug: {}", project.slug));
        self.progress_reporter.report(&format!(
            "\t branch: {}",
            project.branch.as_deref().unwrap_or("-")
        ));
        self.progress_reporter.report(&format!(
            "\t color: {}",
            project.color.as_deref().unwrap_or("-")
        ));

        Ok(project)
    }
}
