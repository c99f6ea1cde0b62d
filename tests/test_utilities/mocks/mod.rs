/// Mock implementations for testing
mod mock_config_store;
mod mock_gemnasium_api;
mod mock_inventory_reader;
mod mock_output_presenter;
mod mock_progress_reporter;

pub use mock_config_store::MockConfigStore;
pub use mock_gemnasium_api::MockGemnasiumApi;
pub use mock_inventory_reader::MockInventoryReader;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
