use gemnasium_maven::prelude::*;
use std::path::Path;

/// Mock InventoryReader for testing
pub struct MockInventoryReader {
    pub inventory: DependencyInventory,
    pub should_fail: bool,
}

impl MockInventoryReader {
    pub fn new(artifacts: Vec<Artifact>, direct_dependencies: Vec<DirectDependency>) -> Self {
        Self {
            inventory: DependencyInventory::new(artifacts, direct_dependencies),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            inventory: DependencyInventory::default(),
            should_fail: true,
        }
    }
}

impl InventoryReader for MockInventoryReader {
    fn read_inventory(&self, _project_path: &Path) -> Result<DependencyInventory> {
        if self.should_fail {
            anyhow::bail!("Mock inventory reader failure");
        }
        Ok(self.inventory.clone())
    }
}
