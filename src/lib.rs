//! gemnasium-maven - send a Maven project's dependencies to Gemnasium
//!
//! This library inventories the resolved dependency graph exported by the
//! build tool, turns it into Gemnasium's versioned dependency file and talks
//! to the Gemnasium v2 API. It follows a hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_report`): dependency records and the pure
//!   flattening, filtering and encoding services
//! - **Configuration** (`config`): layered configuration resolution
//! - **Application Layer** (`application`): one use case per command
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use gemnasium_maven::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let project_path = PathBuf::from(".");
//! let config = LoadConfigUseCase::new(FileConfigStore::new(&project_path))
//!     .execute(&ConfigValues::default(), &ConfigValues::default())?;
//!
//! let use_case = SendDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     GemnasiumClient::from_config(&config)?,
//!     StderrProgressReporter::new(),
//! );
//! let commit_sha = use_case.execute(&DependencyRequest::new(project_path), &config)?;
//! println!("{}", commit_sha);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileConfigStore, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::GemnasiumClient;
    pub use crate::application::dto::{CreateProjectRequest, DependencyRequest};
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{
        CreateProjectUseCase, DumpDependenciesUseCase, LoadConfigUseCase, PingUseCase,
        SendDependenciesUseCase, ShowConfigUseCase, ShowProjectUseCase,
    };
    pub use crate::config::{Config, ConfigValues, PropertyMap};
    pub use crate::dependency_report::domain::{
        Artifact, DependencyFile, DependencyInventory, DependencyRecord, DirectDependency,
    };
    pub use crate::dependency_report::services::{
        DependencyFileEncoder, DependencyFlattener, ScopeFilter,
    };
    pub use crate::ports::outbound::{
        ConfigStore, DependencyFilePayload, GemnasiumApi, InventoryReader, NewProject,
        OutputPresenter, ProgressReporter, ProjectInfo, RevisionInfo,
    };
    pub use crate::shared::error::{ExitCode, GemnasiumError};
    pub use crate::shared::Result;
}
