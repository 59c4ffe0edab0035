/// ProgressReporter port for user feedback on stderr
///
/// Standard output carries the report itself, so everything a user should
/// see while the graph is being built goes through this port.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value, `0` when unknown
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Clears any progress display once the work is done
    fn finish(&self);
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &P {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn finish(&self) {
        (**self).finish()
    }
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for Box<P> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn finish(&self) {
        (**self).finish()
    }
}
