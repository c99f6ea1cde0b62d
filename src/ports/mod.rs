/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe everything the commands need from the outside
/// world: the persisted configuration, the build tool's dependency
/// inventory, the Gemnasium API and the console.
pub mod outbound;
