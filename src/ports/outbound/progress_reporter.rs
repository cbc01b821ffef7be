/// ProgressReporter port for reporting progress and warnings
///
/// This port abstracts user feedback (e.g., to stderr) so that the
/// rendered dashboard on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning that does not stop the operation
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
