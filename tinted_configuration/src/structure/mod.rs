//! Module containing the entire configuration structure for `tinted`.

pub mod output;

use std::fs;
use std::path::PathBuf;

use miette::{miette, Context, Result};
use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::output::{OutputConfiguration, UnresolvedOutputConfiguration};
use crate::traits::{
    ResolvableConfiguration,
    ResolvableWithContextConfiguration,
};
use crate::utilities::{
    find_default_configuration_file_path,
    get_default_configuration_file_path,
};

/// This struct contains the entire `tinted` configuration.
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub output: OutputConfiguration,

    /// `None` when the configuration was not loaded from a file.
    pub configuration_file_path: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Default)]
#[serde(default)]
struct UnresolvedConfiguration {
    output: UnresolvedOutputConfiguration,
}

impl Configuration {
    pub fn load_from_path<S: Into<PathBuf>>(
        configuration_filepath: S,
    ) -> Result<Configuration> {
        let configuration_filepath = configuration_filepath.into();

        let configuration_string = fs::read_to_string(&configuration_filepath)
            .map_err(|error| ConfigurationError::FileLoadError {
                file_path: configuration_filepath.clone(),
                error,
            })?;

        Self::load_from_str(&configuration_string, configuration_filepath)
    }

    /// Parse and resolve a configuration from its TOML contents.
    /// `configuration_filepath` is only used for error reporting and is stored
    /// (canonicalized, if possible) on the resulting configuration.
    pub fn load_from_str<S: Into<PathBuf>>(
        configuration_string: &str,
        configuration_filepath: S,
    ) -> Result<Configuration> {
        let configuration_filepath = configuration_filepath.into();

        let unresolved_configuration: UnresolvedConfiguration =
            toml::from_str(configuration_string).map_err(|error| {
                ConfigurationError::FileFormatError {
                    file_path: configuration_filepath.clone(),
                    error: Box::new(error),
                }
            })?;

        let configuration_file_path = dunce::canonicalize(&configuration_filepath)
            .unwrap_or(configuration_filepath);

        unresolved_configuration
            .resolve(configuration_file_path)
            .wrap_err_with(|| miette!("Could not resolve configuration."))
    }

    pub fn load_default_path() -> Result<Configuration> {
        Configuration::load_from_path(
            get_default_configuration_file_path().wrap_err_with(|| {
                miette!("Could not get default configuration file path.")
            })?,
        )
    }

    /// Load the default configuration file if there is one, otherwise
    /// return the built-in defaults.
    pub fn load_default_path_or_default() -> Result<Configuration> {
        match find_default_configuration_file_path()? {
            Some(configuration_filepath) => {
                Configuration::load_from_path(configuration_filepath)
            }
            None => Ok(Configuration::default()),
        }
    }
}

impl ResolvableWithContextConfiguration for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = PathBuf;

    fn resolve(
        self,
        configuration_file_path: PathBuf,
    ) -> Result<Self::Resolved> {
        let output = self.output.resolve()?;

        Ok(Configuration {
            output,
            configuration_file_path: Some(configuration_file_path),
        })
    }
}
