use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::dependency_report::domain::DEPENDENCY_FILE_NAME;
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// The dependency file inside the project base directory
    pub fn dependency_file(project_path: &Path) -> Self {
        PresenterType::File(project_path.join(DEPENDENCY_FILE_NAME))
    }
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use gemnasium_maven::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
