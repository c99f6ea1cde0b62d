use serde::Deserialize;

/// Returns the `group:artifact` part of a colon-delimited Maven coordinate.
///
/// Coordinates come as `group:artifact:version`, `group:artifact:type:version`
/// or `group:artifact:type:classifier:version`; only the first two segments
/// identify the dependency. A coordinate without any colon is returned as is.
pub fn group_artifact(coordinate: &str) -> String {
    let mut segments = coordinate.splitn(3, ':');
    match (segments.next(), segments.next()) {
        (Some(group), Some(artifact)) => format!("{}:{}", group, artifact),
        _ => coordinate.to_string(),
    }
}

/// Artifact resolved by the build tool
///
/// The dependency trail lists the coordinates walked from the root project
/// down to this artifact, both ends included. Packaging type and the optional
/// flag may appear in the inventory but play no part in the dependency file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
    scope: String,
    #[serde(default)]
    classifier: Option<String>,
    #[serde(default)]
    dependency_trail: Vec<String>,
}

impl Artifact {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: scope.into(),
            classifier: None,
            dependency_trail: Vec::new(),
        }
    }

    pub fn with_dependency_trail<I, S>(mut self, trail: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependency_trail = trail.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn dependency_trail(&self) -> &[String] {
        &self.dependency_trail
    }

    /// `group:artifact` key used to match declared dependencies
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// Dependency declared by the project itself, with the version it asked for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectDependency {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl DirectDependency {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}
