use std::env;
use std::io::{self, IsTerminal, Write};

use crate::console::{ColourCapableBackend, ColourMode, Colouring, PlainBackend};

/// Minimum number of colours a terminal must report for `auto` mode to colour output.
const MINIMUM_COLOUR_COUNT: u16 = 8;

/// Facts about the terminal the colour probe bases its decision on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TerminalEnvironment {
    pub stdout_is_terminal: bool,

    /// `NO_COLOR` is set to a non-empty value (see <https://no-color.org>).
    pub no_color_requested: bool,

    pub available_colour_count: u16,
}

impl TerminalEnvironment {
    /// Inspect the environment of the current process.
    pub fn detect() -> Self {
        let no_color_requested = env::var_os("NO_COLOR")
            .map(|value| !value.is_empty())
            .unwrap_or(false);

        Self {
            stdout_is_terminal: io::stdout().is_terminal(),
            no_color_requested,
            available_colour_count: crossterm::style::available_color_count(),
        }
    }
}


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnavailableReason {
    NotATerminal,
    NoColorRequested,
    TooFewColours(u16),
}

/// Outcome of probing for colour support.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CapabilityProbe {
    /// Colour is available (or was forced on).
    Capable,

    /// Colour was turned off explicitly.
    Disabled,

    /// `auto` mode found that colour can't be shown.
    Unavailable(UnavailableReason),
}

impl CapabilityProbe {
    pub fn into_colouring(self) -> Colouring {
        match self {
            CapabilityProbe::Capable => ColourCapableBackend.into(),
            CapabilityProbe::Disabled | CapabilityProbe::Unavailable(_) => {
                PlainBackend.into()
            }
        }
    }

    /// Whether falling back to plain text should be announced to the user.
    /// Only a terminal that can't show colour is announced: redirected output
    /// must stay clean, and `NO_COLOR` is a choice, not a missing capability.
    pub fn warrants_fallback_notice(self) -> bool {
        matches!(
            self,
            CapabilityProbe::Unavailable(UnavailableReason::TooFewColours(_))
        )
    }
}


/// Decide whether output should be coloured, looking at the current process' terminal.
pub fn probe_colour_capability(mode: ColourMode) -> CapabilityProbe {
    match mode {
        ColourMode::Always => CapabilityProbe::Capable,
        ColourMode::Never => CapabilityProbe::Disabled,
        ColourMode::Auto => {
            probe_colour_capability_in(mode, &TerminalEnvironment::detect())
        }
    }
}

/// Same as [`probe_colour_capability`], but with the terminal facts supplied by the caller.
pub fn probe_colour_capability_in(
    mode: ColourMode,
    environment: &TerminalEnvironment,
) -> CapabilityProbe {
    match mode {
        ColourMode::Always => CapabilityProbe::Capable,
        ColourMode::Never => CapabilityProbe::Disabled,
        ColourMode::Auto => {
            if environment.no_color_requested {
                CapabilityProbe::Unavailable(UnavailableReason::NoColorRequested)
            } else if !environment.stdout_is_terminal {
                CapabilityProbe::Unavailable(UnavailableReason::NotATerminal)
            } else if environment.available_colour_count < MINIMUM_COLOUR_COUNT {
                CapabilityProbe::Unavailable(UnavailableReason::TooFewColours(
                    environment.available_colour_count,
                ))
            } else {
                CapabilityProbe::Capable
            }
        }
    }
}

/// Write the two-line notice explaining that output will not be coloured.
pub fn write_fallback_notice<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "Unable to enable coloured output (the terminal does not appear to support it)."
    )?;
    writeln!(
        writer,
        "Try: run inside a colour-capable terminal, or pass `--colour always`."
    )?;
    writer.flush()
}
