/// CreateProjectRequest - Input of the create-project command
///
/// Fields stay optional here; the use case reports which one is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub team_slug: Option<String>,
    pub project_name: Option<String>,
    pub project_description: Option<String>,
}

impl CreateProjectRequest {
    pub fn new(
        team_slug: Option<String>,
        project_name: Option<String>,
        project_description: Option<String>,
    ) -> Self {
        Self {
            team_slug,
            project_name,
            project_description,
        }
    }
}
