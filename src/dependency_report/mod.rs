/// Dependency report generation - domain model and pure services
///
/// Nothing in this module performs I/O: it turns the resolved artifact set
/// handed over by the build tool into the dependency file sent to Gemnasium.
pub mod domain;
pub mod services;
