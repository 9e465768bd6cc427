use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// Failures of the underlying output sink. Colour support being unavailable
/// is never an error; see [`crate::console::CapabilityProbe`].
#[derive(Error, Debug, Diagnostic)]
pub enum ReporterError {
    #[error("Failed to write message to the console.")]
    #[diagnostic(code(tinted::reporter::write))]
    Write {
        #[source]
        error: io::Error,
    },

    #[error("Failed to flush the console.")]
    #[diagnostic(code(tinted::reporter::flush))]
    Flush {
        #[source]
        error: io::Error,
    },
}
