//! A process-wide reporter for callers that don't want to pass one around.

use std::fmt::Display;

use crate::console::{ConsoleReporter, ReporterError, ReporterOptions};

/// Global reporter printing to standard output.
static REPORTER: state::InitCell<ConsoleReporter> =
    state::InitCell::new();

/// Install the process-wide reporter. Only the first call (or the first
/// message printed through the free functions) decides its options;
/// returns `false` if a reporter was already installed.
pub fn init(options: ReporterOptions) -> bool {
    REPORTER.set(ConsoleReporter::new(options))
}

/// Get the process-wide reporter, installing one with default options if needed.
pub fn reporter() -> &'static ConsoleReporter {
    if let Some(reporter) = REPORTER.try_get() {
        return reporter;
    }

    // Losing a race here is fine, `get` returns whichever reporter won.
    REPORTER.set(ConsoleReporter::new(ReporterOptions::default()));
    REPORTER.get()
}

/// Toggle verbose output on the process-wide reporter.
pub fn set_verbose(verbose: bool) {
    reporter().set_verbose(verbose);
}

pub fn info<D: Display>(text: D) -> Result<(), ReporterError> {
    reporter().info(text)
}

pub fn info_end<D: Display>(text: D, end: &str) -> Result<(), ReporterError> {
    reporter().info_end(text, end)
}

pub fn verbose<D: Display>(text: D) -> Result<(), ReporterError> {
    reporter().verbose(text)
}

pub fn verbose_end<D: Display>(
    text: D,
    end: &str,
) -> Result<(), ReporterError> {
    reporter().verbose_end(text, end)
}

pub fn ok<D: Display>(text: D) -> Result<(), ReporterError> {
    reporter().ok(text)
}

pub fn ok_end<D: Display>(text: D, end: &str) -> Result<(), ReporterError> {
    reporter().ok_end(text, end)
}

pub fn warn<D: Display>(text: D) -> Result<(), ReporterError> {
    reporter().warn(text)
}

pub fn warn_end<D: Display>(text: D, end: &str) -> Result<(), ReporterError> {
    reporter().warn_end(text, end)
}

pub fn error<D: Display>(text: D) -> Result<(), ReporterError> {
    reporter().error(text)
}

pub fn error_end<D: Display>(
    text: D,
    end: &str,
) -> Result<(), ReporterError> {
    reporter().error_end(text, end)
}
