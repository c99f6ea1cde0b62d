use crate::dependency_report::domain::Artifact;
use std::collections::HashSet;

/// ScopeFilter - Drops artifacts whose Maven scope is ignored
///
/// Filtering is stable: surviving artifacts keep their relative order.
#[derive(Debug, Default)]
pub struct ScopeFilter {
    ignored_scopes: HashSet<String>,
}

impl ScopeFilter {
    /// Creates a filter from scope names; blank entries are skipped
    pub fn new<I, S>(ignored_scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ignored_scopes = ignored_scopes
            .into_iter()
            .map(|scope| scope.as_ref().trim().to_string())
            .filter(|scope| !scope.is_empty())
            .collect();
        Self { ignored_scopes }
    }

    pub fn is_empty(&self) -> bool {
        self.ignored_scopes.is_empty()
    }

    pub fn is_ignored(&self, scope: &str) -> bool {
        self.ignored_scopes.contains(scope)
    }

    /// Filters artifacts, returning only those whose scope is not ignored
    pub fn filter_artifacts(&self, artifacts: Vec<Artifact>) -> Vec<Artifact> {
        if self.is_empty() {
            return artifacts;
        }

        artifacts
            .into_iter()
            .filter(|artifact| !self.is_ignored(artifact.scope()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts() -> Vec<Artifact> {
        vec![
            Artifact::new("org.slf4j", "slf4j-api", "1.7.25", "compile"),
            Artifact::new("junit", "junit", "4.12", "test"),
            Artifact::new("javax.servlet", "servlet-api", "2.5", "provided"),
            Artifact::new("org.hamcrest", "hamcrest-core", "1.3", "test"),
            Artifact::new("com.google.guava", "guava", "20.0", "compile"),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let filter = ScopeFilter::new(Vec::<String>::new());
        assert!(filter.is_empty());
        assert_eq!(filter.filter_artifacts(artifacts()), artifacts());
    }

    #[test]
    fn test_filter_removes_ignored_scope() {
        let filter = ScopeFilter::new(["test"]);
        let filtered = filter.filter_artifacts(artifacts());

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|a| a.scope() != "test"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = ScopeFilter::new(["test", "provided"]);
        let keys: Vec<String> = filter
            .filter_artifacts(artifacts())
            .iter()
            .map(Artifact::key)
            .collect();

        assert_eq!(keys, vec!["org.slf4j:slf4j-api", "com.google.guava:guava"]);
    }

    #[test]
    fn test_blank_scopes_are_skipped() {
        let filter = ScopeFilter::new(["", "  "]);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_scopes_are_trimmed_and_deduplicated() {
        let filter = ScopeFilter::new([" test", "test ", "test"]);
        assert!(filter.is_ignored("test"));
        assert_eq!(filter.ignored_scopes.len(), 1);
    }
}
