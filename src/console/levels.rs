use std::fmt::{Display, Formatter};

use crate::console::Colour;

/// The semantic category of a message. Determines its colour, its label
/// and whether it is gated by verbosity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Verbose,
    Ok,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Info,
        Level::Verbose,
        Level::Ok,
        Level::Warn,
        Level::Error,
    ];

    pub fn colour(self) -> Option<Colour> {
        match self {
            Level::Info => None,
            Level::Verbose => Some(Colour::Cyan),
            Level::Ok => Some(Colour::Green),
            Level::Warn => Some(Colour::Magenta),
            Level::Error => Some(Colour::Red),
        }
    }

    /// Text printed in front of the message, if any.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Level::Warn => Some("Warning: "),
            Level::Error => Some("Error: "),
            _ => None,
        }
    }

    /// Whether messages of this level are only printed in verbose mode.
    pub fn is_verbose_only(self) -> bool {
        self == Level::Verbose
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Level::Info => "info",
            Level::Verbose => "verbose",
            Level::Ok => "ok",
            Level::Warn => "warn",
            Level::Error => "error",
        };

        f.write_str(name)
    }
}
