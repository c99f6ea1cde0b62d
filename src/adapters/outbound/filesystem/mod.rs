/// Filesystem adapters for file I/O operations
mod config_store;
mod file_reader;
mod file_writer;

pub use config_store::{FileConfigStore, CONFIG_FILENAME};
pub use file_reader::{FileSystemReader, DEFAULT_INVENTORY_PATH};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
