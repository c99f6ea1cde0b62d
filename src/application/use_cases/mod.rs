/// Use cases module, one per command
mod create_project;
mod dump_dependencies;
mod load_config;
mod ping;
mod send_dependencies;
mod show_config;
mod show_project;

pub use create_project::CreateProjectUseCase;
pub use dump_dependencies::DumpDependenciesUseCase;
pub use load_config::LoadConfigUseCase;
pub use ping::PingUseCase;
pub use send_dependencies::SendDependenciesUseCase;
pub use show_config::ShowConfigUseCase;
pub use show_project::ShowProjectUseCase;
