pub mod artifact;
pub mod dependency_file;
pub mod dependency_record;
pub mod inventory;

pub use artifact::{group_artifact, Artifact, DirectDependency};
pub use dependency_file::{DependencyFile, DEPENDENCY_FILE_NAME, DEPENDENCY_FILE_VERSION};
pub use dependency_record::DependencyRecord;
pub use inventory::DependencyInventory;
