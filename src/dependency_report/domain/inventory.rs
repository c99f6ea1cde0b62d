use super::{Artifact, DirectDependency};
use serde::Deserialize;

/// Resolved dependency set exported by the build tool
///
/// `artifacts` keeps the resolver's walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyInventory {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub direct_dependencies: Vec<DirectDependency>,
}

impl DependencyInventory {
    pub fn new(artifacts: Vec<Artifact>, direct_dependencies: Vec<DirectDependency>) -> Self {
        Self {
            artifacts,
            direct_dependencies,
        }
    }
}
