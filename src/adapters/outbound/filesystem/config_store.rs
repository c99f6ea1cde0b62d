use crate::config::PropertyMap;
use crate::ports::outbound::ConfigStore;
use crate::shared::error::GemnasiumError;
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the configuration file in the project directory
pub const CONFIG_FILENAME: &str = "gemnasium.toml";

/// FileConfigStore adapter persisting the configuration as a flat TOML table
///
/// Keys other than the known properties are kept as they are on merge.
/// Concurrent invocations against the same file are not synchronized.
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Store located at `<project_dir>/gemnasium.toml`
    pub fn new(project_dir: &Path) -> Self {
        Self {
            path: project_dir.join(CONFIG_FILENAME),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_error(&self, details: impl Into<String>) -> anyhow::Error {
        GemnasiumError::ConfigLoad {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Reads the raw table; a missing file is an empty table
    fn read_table(&self) -> Result<toml::Table> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(e) => return Err(self.load_error(e.to_string())),
        };

        content
            .parse::<toml::Table>()
            .map_err(|e| self.load_error(format!("Invalid TOML: {}", e)))
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<PropertyMap> {
        self.read_table()?
            .into_iter()
            .map(|(key, value)| match value {
                toml::Value::String(value) => Ok((key, value)),
                other => Err(self.load_error(format!(
                    "Expected a string for '{}', found {}",
                    key,
                    other.type_str()
                ))),
            })
            .collect()
    }

    fn merge(&self, properties: &PropertyMap) -> Result<()> {
        let mut table = self.read_table()?;
        for (key, value) in properties {
            table.insert(key.clone(), toml::Value::String(value.clone()));
        }

        let content = toml::to_string(&table).map_err(|e| GemnasiumError::Serialization {
            what: "configuration".to_string(),
            details: e.to_string(),
        })?;

        fs::write(&self.path, content).map_err(|e| {
            GemnasiumError::FileWrite {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
