/// ProgressReporter port for user feedback
///
/// Warnings and status lines go through this port so that stdout stays
/// reserved for command output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
