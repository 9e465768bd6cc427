//! Leveled, optionally coloured console output.
//!
//! The main entry point is [`ConsoleReporter`], which prints `info`, `verbose`, `ok`,
//! `warn` and `error` messages. Colour support is probed once when a reporter is created;
//! if the terminal can't show colour, every message is still printed, just as plain text.
//!
//! For quick scripts there is also a process-wide reporter behind the free functions
//! in this crate root (see [`init`]).

pub mod console;
mod globals;

pub use console::{
    ColourMode,
    ConsoleReporter,
    Level,
    ReporterError,
    ReporterOptions,
};
pub use globals::{
    error,
    error_end,
    info,
    info_end,
    init,
    ok,
    ok_end,
    reporter,
    set_verbose,
    verbose,
    verbose_end,
    warn,
    warn_end,
};

pub const TINTED_VERSION: &str = env!("CARGO_PKG_VERSION");
