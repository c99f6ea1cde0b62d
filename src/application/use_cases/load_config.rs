use crate::config::{Config, ConfigValues};
use crate::ports::outbound::ConfigStore;
use crate::shared::Result;

/// LoadConfigUseCase - Resolves the configuration of one invocation
///
/// Reads the persisted layer through the injected store and merges it under
/// the environment and command-line layers.
pub struct LoadConfigUseCase<S> {
    store: S,
}

impl<S: ConfigStore> LoadConfigUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// # Errors
    /// Returns an error if the persisted configuration exists but is unreadable
    pub fn execute(&self, env: &ConfigValues, params: &ConfigValues) -> Result<Config> {
        let persisted = ConfigValues::from_properties(&self.store.load()?);
        Ok(Config::resolve(env, params, &persisted))
    }
}
