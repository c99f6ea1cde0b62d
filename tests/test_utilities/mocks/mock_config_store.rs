use gemnasium_maven::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ConfigStore backed by an in-memory property map
#[derive(Clone)]
pub struct MockConfigStore {
    pub properties: Arc<Mutex<PropertyMap>>,
    pub path: PathBuf,
    pub fail_on_merge: bool,
}

impl MockConfigStore {
    pub fn new() -> Self {
        Self {
            properties: Arc::new(Mutex::new(PropertyMap::new())),
            path: PathBuf::from("/project/gemnasium.toml"),
            fail_on_merge: false,
        }
    }

    pub fn with_property(self, key: &str, value: &str) -> Self {
        self.properties
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn read_only() -> Self {
        Self {
            fail_on_merge: true,
            ..Self::new()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.properties.lock().unwrap().get(key).cloned()
    }
}

impl Default for MockConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for MockConfigStore {
    fn load(&self) -> Result<PropertyMap> {
        Ok(self.properties.lock().unwrap().clone())
    }

    fn merge(&self, properties: &PropertyMap) -> Result<()> {
        if self.fail_on_merge {
            anyhow::bail!("Permission denied");
        }
        let mut stored = self.properties.lock().unwrap();
        for (key, value) in properties {
            stored.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
