use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::traits::ResolvableConfiguration;

/// How the colouring capability is selected when a reporter is created.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColourMode {
    /// Probe the terminal and fall back to plain text if it can't show colour.
    #[default]
    Auto,

    /// Always colour, even when the output is not a terminal.
    Always,

    /// Never colour.
    Never,
}

impl FromStr for ColourMode {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColourMode::Auto),
            "always" => Ok(ColourMode::Always),
            "never" => Ok(ColourMode::Never),
            _ => Err(ConfigurationError::InvalidColourMode {
                value: value.to_string(),
            }),
        }
    }
}

impl Display for ColourMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColourMode::Auto => write!(f, "auto"),
            ColourMode::Always => write!(f, "always"),
            ColourMode::Never => write!(f, "never"),
        }
    }
}


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputConfiguration {
    pub verbose: bool,

    pub colour: ColourMode,

    /// Whether to print the two-line notice when `auto` colour falls back to plain text.
    pub show_fallback_notice: bool,
}

impl Default for OutputConfiguration {
    fn default() -> Self {
        Self {
            verbose: false,
            colour: ColourMode::Auto,
            show_fallback_notice: true,
        }
    }
}


#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub(crate) struct UnresolvedOutputConfiguration {
    verbose: Option<bool>,

    colour: Option<String>,

    show_fallback_notice: Option<bool>,
}

impl ResolvableConfiguration for UnresolvedOutputConfiguration {
    type Resolved = OutputConfiguration;

    fn resolve(self) -> miette::Result<Self::Resolved> {
        let defaults = OutputConfiguration::default();

        let colour = match self.colour {
            Some(colour) => colour.parse::<ColourMode>()?,
            None => defaults.colour,
        };

        Ok(OutputConfiguration {
            verbose: self.verbose.unwrap_or(defaults.verbose),
            colour,
            show_fallback_notice: self
                .show_fallback_notice
                .unwrap_or(defaults.show_fallback_notice),
        })
    }
}
