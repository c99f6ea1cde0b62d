use super::DependencyRecord;
use serde::{Deserialize, Serialize};

/// Name of the dependency file, both on the wire and on disk
pub const DEPENDENCY_FILE_NAME: &str = "gemnasium-maven-plugin.json";

/// Format version of the dependency file
pub const DEPENDENCY_FILE_VERSION: &str = "1.0";

/// Versioned envelope around the flattened dependency records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyFile {
    pub version: String,
    pub dependencies: Vec<DependencyRecord>,
}

impl DependencyFile {
    pub fn new(dependencies: Vec<DependencyRecord>) -> Self {
        Self {
            version: DEPENDENCY_FILE_VERSION.to_string(),
            dependencies,
        }
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}
