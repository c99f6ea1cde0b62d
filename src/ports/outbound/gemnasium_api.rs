use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Body of a project creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub basename: String,
    pub description: Option<String>,
}

impl NewProject {
    /// Builds the request, deriving the basename from the name
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let name = name.into();
        Self {
            basename: Self::basename(&name),
            name,
            description,
        }
    }

    /// Replaces every character outside `[A-Za-z0-9._-]` with `-`
    ///
    /// Characters are replaced one for one; runs are not collapsed.
    pub fn basename(name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}

/// One file of a dependency file upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyFilePayload {
    pub path: String,
    pub content: String,
}

/// Branch and revision attached to an upload, when known
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionInfo {
    pub branch: Option<String>,
    pub revision: Option<String>,
}

/// Project attributes returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// GemnasiumApi port for the remote dependency-tracking service
///
/// Every operation is a single blocking request; nothing is retried.
pub trait GemnasiumApi {
    /// Checks that the API is reachable, returning the response body
    fn ping(&self) -> Result<String>;

    /// Creates a project in the given team
    ///
    /// # Returns
    /// The slug of the new project
    ///
    /// # Errors
    /// Returns an error if the request fails, the API rejects it, or the
    /// response carries no slug
    fn create_project(&self, team_slug: &str, project: &NewProject) -> Result<String>;

    /// Uploads dependency files to a project, creating a new revision
    ///
    /// # Returns
    /// The SHA of the commit created by Gemnasium
    fn upload_dependency_files(
        &self,
        project_slug: &str,
        revision: &RevisionInfo,
        files: &[DependencyFilePayload],
    ) -> Result<String>;

    /// Fetches the attributes of a project
    fn fetch_project(&self, project_slug: &str) -> Result<ProjectInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_replaces_each_character() {
        assert_eq!(NewProject::basename("My Project!"), "My-Project-");
        assert_eq!(NewProject::basename("a  b"), "a--b");
    }

    #[test]
    fn test_basename_keeps_allowed_characters() {
        assert_eq!(
            NewProject::basename("my_app-1.0.Final"),
            "my_app-1.0.Final"
        );
    }

    #[test]
    fn test_basename_replaces_non_ascii() {
        assert_eq!(NewProject::basename("café/api"), "caf--api");
    }

    #[test]
    fn test_new_project_serializes_null_description() {
        let project = NewProject::new("My Project", None);
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "My Project",
                "basename": "My-Project",
                "description": null
            })
        );
    }

    #[test]
    fn test_project_info_without_optional_fields() {
        let info: ProjectInfo =
            serde_json::from_str(r#"{"name": "app", "slug": "3zT2s1kHqA"}"#).unwrap();
        assert_eq!(info.slug, "3zT2s1kHqA");
        assert!(info.branch.is_none());
        assert!(info.color.is_none());
    }
}
