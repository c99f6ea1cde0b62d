use crate::dependency_report::domain::DependencyInventory;
use crate::ports::outbound::InventoryReader;
use crate::shared::error::GemnasiumError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the inventory, relative to the project directory
pub const DEFAULT_INVENTORY_PATH: &str = "target/gemnasium-inventory.json";

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading the dependency inventory
///
/// This adapter implements the InventoryReader port. The inventory is the
/// JSON export of the build tool's resolved artifacts and declared
/// dependencies.
pub struct FileSystemReader {
    inventory_path: PathBuf,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
        }
    }

    /// Reads the inventory from `path` instead of the default location
    ///
    /// Relative paths are resolved against the project directory.
    pub fn with_inventory_path(path: impl Into<PathBuf>) -> Self {
        Self {
            inventory_path: path.into(),
        }
    }

    fn resolve_path(&self, project_path: &Path) -> PathBuf {
        if self.inventory_path.is_absolute() {
            self.inventory_path.clone()
        } else {
            project_path.join(&self.inventory_path)
        }
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryReader for FileSystemReader {
    fn read_inventory(&self, project_path: &Path) -> Result<DependencyInventory> {
        let path = self.resolve_path(project_path);

        if !path.exists() {
            return Err(GemnasiumError::InventoryRead {
                path,
                details: "File does not exist".to_string(),
            }
            .into());
        }

        let content = self
            .safe_read_file(&path)
            .map_err(|e| GemnasiumError::InventoryRead {
                path: path.clone(),
                details: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| {
            GemnasiumError::InventoryRead {
                path,
                details: format!("Invalid inventory JSON: {}", e),
            }
            .into()
        })
    }
}
