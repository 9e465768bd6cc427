//! Console reporting: levels, colouring backends and the reporter itself.
//!
//! Colouring is done through one of two backends implementing [`ColouringBackend`]:
//! - [`ColourCapableBackend`] wraps text in terminal escape sequences (via `crossterm`),
//! - [`PlainBackend`] passes text through unchanged.
//!
//! Which one a reporter uses is decided once, when it is created, by
//! [`probe_colour_capability`]. The two are held in the [`Colouring`] enum and
//! dispatched with a `match` (enum dispatch) instead of a trait object.

mod colouring;
mod colours;
mod error;
mod levels;
mod macro_impls;
mod probe;
mod reporter;
mod traits;

pub use colouring::{ColourCapableBackend, Colouring, PlainBackend};
pub use colours::Colour;
pub use error::ReporterError;
pub use levels::Level;
pub use probe::{
    probe_colour_capability,
    probe_colour_capability_in,
    write_fallback_notice,
    CapabilityProbe,
    TerminalEnvironment,
    UnavailableReason,
};
pub use reporter::{ConsoleReporter, ReporterOptions, DEFAULT_END};
pub use tinted_configuration::output::ColourMode;
pub use traits::ColouringBackend;
