use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigurationError {
    #[error("Failed to load configuration file \"{}\".", .file_path.display())]
    #[diagnostic(code(tinted::configuration::load))]
    FileLoadError {
        file_path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error(
        "Failed to parse configuration file \
        \"{}\" as TOML: {error}.", .file_path.display()
    )]
    #[diagnostic(code(tinted::configuration::format))]
    FileFormatError {
        file_path: PathBuf,
        error: Box<toml::de::Error>,
    },

    #[error("Invalid colour mode \"{value}\".")]
    #[diagnostic(
        code(tinted::configuration::colour),
        help("Expected one of \"auto\", \"always\" or \"never\".")
    )]
    InvalidColourMode { value: String },

    #[error("Could not find a configuration file at \"{}\".", .file_path.display())]
    #[diagnostic(
        code(tinted::configuration::missing),
        help("Pass an explicit path with -c/--config.")
    )]
    MissingDefaultFile { file_path: PathBuf },
}
