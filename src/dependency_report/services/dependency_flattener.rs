use crate::dependency_report::domain::{
    group_artifact, Artifact, DependencyRecord, DirectDependency,
};
use std::collections::HashMap;

/// DependencyFlattener service turning resolved artifacts into dependency records
///
/// This service contains pure business logic: one record per artifact, in the
/// order the resolver walked the graph.
pub struct DependencyFlattener;

impl DependencyFlattener {
    /// Flattens the resolved artifacts
    ///
    /// # Arguments
    /// * `artifacts` - Resolved artifacts, in resolver order
    /// * `direct_dependencies` - Dependencies declared by the project
    ///
    /// # Returns
    /// One DependencyRecord per artifact. The requirement is the declared
    /// version for direct dependencies and the resolved version otherwise.
    pub fn flatten(
        artifacts: &[Artifact],
        direct_dependencies: &[DirectDependency],
    ) -> Vec<DependencyRecord> {
        let requirements: HashMap<String, &str> = direct_dependencies
            .iter()
            .map(|dependency| (dependency.key(), dependency.version()))
            .collect();

        artifacts
            .iter()
            .map(|artifact| {
                let name = artifact.key();
                let requirement = requirements
                    .get(&name)
                    .copied()
                    .unwrap_or_else(|| artifact.version());

                DependencyRecord::new(
                    name.clone(),
                    artifact.version().to_string(),
                    requirement.to_string(),
                    artifact.scope().to_string(),
                    artifact.classifier().map(str::to_string),
                    Self::derive_parents(artifact.dependency_trail()),
                )
            })
            .collect()
    }

    /// Derives the ancestors of an artifact from its dependency trail
    ///
    /// The first trail entry is the root project and the last one the artifact
    /// itself; both are dropped. Trails shorter than three entries have no parents.
    pub fn derive_parents(trail: &[String]) -> Vec<String> {
        if trail.len() < 3 {
            return Vec::new();
        }

        trail[1..trail.len() - 1]
            .iter()
            .map(|coordinate| group_artifact(coordinate))
            .collect()
    }
}
