use crate::application::dto::DependencyRequest;
use crate::dependency_report::domain::DependencyFile;
use crate::dependency_report::services::{DependencyFileEncoder, DependencyFlattener};
use crate::ports::outbound::{InventoryReader, OutputPresenter, ProgressReporter};
use crate::shared::Result;

/// DumpDependenciesUseCase - Writes the dependency file as readable JSON
///
/// Unlike send-dependencies, every resolved artifact is dumped: ignored
/// scopes are not applied. A failed write is reported as a warning and does
/// not fail the command.
pub struct DumpDependenciesUseCase<IR, OP, PR> {
    inventory_reader: IR,
    presenter: OP,
    progress_reporter: PR,
}

impl<IR, OP, PR> DumpDependenciesUseCase<IR, OP, PR>
where
    IR: InventoryReader,
    OP: OutputPresenter,
    PR: ProgressReporter,
{
    pub fn new(inventory_reader: IR, presenter: OP, progress_reporter: PR) -> Self {
        Self {
            inventory_reader,
            presenter,
            progress_reporter,
        }
    }

    /// Dumps the dependency file
    ///
    /// # Returns
    /// `true` if the file was written, `false` if writing failed
    ///
    /// # Errors
    /// Returns an error if the inventory cannot be read
    pub fn execute(&self, request: &DependencyRequest) -> Result<bool> {
        let inventory = self.inventory_reader.read_inventory(&request.project_path)?;

        let records =
            DependencyFlattener::flatten(&inventory.artifacts, &inventory.direct_dependencies);
        let content = DependencyFileEncoder::to_pretty_json(&DependencyFile::new(records))?;

        let destination = self.presenter.destination();
        match self.presenter.present(&content) {
            Ok(()) => {
                self.progress_reporter.report_completion(&format!(
                    "Project's dependencies have been successfully dumped into: {}",
                    destination
                ));
                Ok(true)
            }
            Err(e) => {
                self.progress_reporter.report_warning(&format!(
                    "Can't write project's dependencies into: {}\n{}",
                    destination, e
                ));
                Ok(false)
            }
        }
    }
}
