use crate::dependency_report::domain::DependencyInventory;
use crate::shared::Result;
use std::path::Path;

/// InventoryReader port for the build tool's resolved dependencies
///
/// This system never resolves dependencies itself; it consumes the resolved
/// artifact set and the declared direct dependencies as exported by the
/// build tool.
pub trait InventoryReader {
    /// Reads the dependency inventory of the project
    ///
    /// # Arguments
    /// * `project_path` - Path to the project base directory
    ///
    /// # Errors
    /// Returns an error if the inventory is missing or malformed
    fn read_inventory(&self, project_path: &Path) -> Result<DependencyInventory>;
}
