mod dependency_file_encoder;
mod dependency_flattener;
mod scope_filter;

pub use dependency_file_encoder::DependencyFileEncoder;
pub use dependency_flattener::DependencyFlattener;
pub use scope_filter::ScopeFilter;
