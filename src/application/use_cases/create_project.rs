use crate::application::dto::CreateProjectRequest;
use crate::config::{Config, PropertyMap, PROJECT_SLUG_KEY};
use crate::ports::outbound::{ConfigStore, GemnasiumApi, NewProject, ProgressReporter};
use crate::shared::error::GemnasiumError;
use crate::shared::Result;

/// CreateProjectUseCase - Creates a Gemnasium project and remembers its slug
///
/// The slug is persisted into the project configuration so that later
/// commands pick it up.
pub struct CreateProjectUseCase<API, S, PR> {
    api: API,
    config_store: S,
    progress_reporter: PR,
}

impl<API, S, PR> CreateProjectUseCase<API, S, PR>
where
    API: GemnasiumApi,
    S: ConfigStore,
    PR: ProgressReporter,
{
    pub fn new(api: API, config_store: S, progress_reporter: PR) -> Self {
        Self {
            api,
            config_store,
            progress_reporter,
        }
    }

    /// Creates the project
    ///
    /// # Returns
    /// The slug of the new project
    ///
    /// # Errors
    /// Returns an error if the team slug or project name is missing, if the
    /// API call fails, or if the slug cannot be persisted. In the last case
    /// the project already exists remotely and the error carries its slug.
    pub fn execute(&self, request: &CreateProjectRequest, config: &Config) -> Result<String> {
        let team_slug = Self::required(request.team_slug.as_deref(), "teamSlug")?;
        let project_name = Self::required(request.project_name.as_deref(), "projectName")?;

        let project = NewProject::new(
            project_name,
            request
                .project_description
                .clone()
                .filter(|description| !description.is_empty()),
        );
        let slug = self.api.create_project(team_slug, &project)?;

        self.persist_slug(&slug)?;

        self.progress_reporter
            .report_completion(&format!("{} project successfully created.", project_name));
        self.progress_reporter
            .report("You can now send your dependencies using `gemnasium send-dependencies`");
        self.progress_reporter.report("And your project is visible at:");
        self.progress_reporter.report(&config.project_url(&slug));

        Ok(slug)
    }

    fn required<'a>(value: Option<&'a str>, option: &str) -> Result<&'a str> {
        match value {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(GemnasiumError::validation(format!(
                "please provide the {} option",
                option
            ))
            .into()),
        }
    }

    fn persist_slug(&self, slug: &str) -> Result<()> {
        let mut properties = PropertyMap::new();
        properties.insert(PROJECT_SLUG_KEY.to_string(), slug.to_string());

        self.config_store.merge(&properties).map_err(|e| {
            GemnasiumError::Persist {
                slug: slug.to_string(),
                path: self.config_store.location().to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
