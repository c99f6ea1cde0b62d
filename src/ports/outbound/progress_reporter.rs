/// ProgressReporter port, the log sink of every command
///
/// Commands report what they did through this port rather than printing,
/// so that tests can capture the messages.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of a command
    fn report_completion(&self, message: &str);
}
