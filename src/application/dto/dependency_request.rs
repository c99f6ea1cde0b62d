use std::path::PathBuf;

/// DependencyRequest - Input of the commands reading the project's dependencies
#[derive(Debug, Clone)]
pub struct DependencyRequest {
    /// Path to the project base directory
    pub project_path: PathBuf,
}

impl DependencyRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }
}
