use gemnasium_maven::prelude::*;
use std::sync::{Arc, Mutex};

/// One recorded call to `upload_dependency_files`
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub project_slug: String,
    pub revision: RevisionInfo,
    pub files: Vec<DependencyFilePayload>,
}

/// Mock GemnasiumApi for testing
///
/// Successful calls answer with canned values and are recorded. A configured
/// failure makes every call return an API error.
#[derive(Clone)]
pub struct MockGemnasiumApi {
    pub ping_body: String,
    pub slug: String,
    pub commit_sha: String,
    pub project: Option<ProjectInfo>,
    pub failure: Option<(u16, String)>,
    pub created: Arc<Mutex<Vec<(String, NewProject)>>>,
    pub uploads: Arc<Mutex<Vec<RecordedUpload>>>,
}

impl MockGemnasiumApi {
    pub fn new() -> Self {
        Self {
            ping_body: "pong".to_string(),
            slug: "3zT2s1kHqA".to_string(),
            commit_sha: "4f1e2d3c".to_string(),
            project: None,
            failure: None,
            created: Arc::new(Mutex::new(Vec::new())),
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_project(mut self, project: ProjectInfo) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_failure(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Self::new()
        }
    }

    pub fn created_projects(&self) -> Vec<(String, NewProject)> {
        self.created.lock().unwrap().clone()
    }

    pub fn recorded_uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some((status, message)) => Err(GemnasiumError::Http {
                status: *status,
                message: message.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl Default for MockGemnasiumApi {
    fn default() -> Self {
        Self::new()
    }
}

impl GemnasiumApi for MockGemnasiumApi {
    fn ping(&self) -> Result<String> {
        self.check_failure()?;
        Ok(self.ping_body.clone())
    }

    fn create_project(&self, team_slug: &str, project: &NewProject) -> Result<String> {
        self.check_failure()?;
        self.created
            .lock()
            .unwrap()
            .push((team_slug.to_string(), project.clone()));
        Ok(self.slug.clone())
    }

    fn upload_dependency_files(
        &self,
        project_slug: &str,
        revision: &RevisionInfo,
        files: &[DependencyFilePayload],
    ) -> Result<String> {
        self.check_failure()?;
        self.uploads.lock().unwrap().push(RecordedUpload {
            project_slug: project_slug.to_string(),
            revision: revision.clone(),
            files: files.to_vec(),
        });
        Ok(self.commit_sha.clone())
    }

    fn fetch_project(&self, project_slug: &str) -> Result<ProjectInfo> {
        self.check_failure()?;
        match &self.project {
            Some(project) if project.slug == project_slug => Ok(project.clone()),
            _ => Err(GemnasiumError::Http {
                status: 404,
                message: "Project not found".to_string(),
            }
            .into()),
        }
    }
}
