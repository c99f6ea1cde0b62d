/// Data Transfer Objects for application layer
///
/// DTOs carry command input from the CLI into the use cases.
mod create_project_request;
mod dependency_request;

pub use create_project_request::CreateProjectRequest;
pub use dependency_request::DependencyRequest;
