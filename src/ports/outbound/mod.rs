/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod config_store;
pub mod gemnasium_api;
pub mod inventory_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use config_store::ConfigStore;
pub use gemnasium_api::{DependencyFilePayload, GemnasiumApi, NewProject, ProjectInfo, RevisionInfo};
pub use inventory_reader::InventoryReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
