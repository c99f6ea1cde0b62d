/// Shared helpers for the integration test suites
pub mod mocks;
