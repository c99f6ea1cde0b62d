use crate::config::PropertyMap;
use crate::shared::Result;
use std::path::Path;

/// ConfigStore port for the persisted project configuration
///
/// The store is a flat map of string properties. A store that does not exist
/// yet loads as an empty map.
pub trait ConfigStore {
    /// Loads every persisted property
    ///
    /// # Errors
    /// Returns an error if the store exists but cannot be read or parsed
    fn load(&self) -> Result<PropertyMap>;

    /// Merges the given properties into the store, leaving other keys untouched
    ///
    /// # Errors
    /// Returns an error if the store cannot be read back or written
    fn merge(&self, properties: &PropertyMap) -> Result<()>;

    /// Location of the store, used in user-facing messages
    fn location(&self) -> &Path;
}
