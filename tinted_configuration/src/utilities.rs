use std::env::args;
use std::path::PathBuf;

use miette::{miette, Context, IntoDiagnostic, Result};

use crate::error::ConfigurationError;

/// Inspect the first command line argument to find out the directory the program resides in.
///
/// When running from cargo's `./target/debug` directory (and the grandparent directory
/// contains `Cargo.toml`), the project directory is returned instead:
///
///  <project directory>
///  |-- target
///  |   |-- debug
///  |       |- tinted(.exe)
///  |- Cargo.toml
///  |- ...
///
/// In the above case, `get_running_executable_directory` will return `<project directory>`, NOT
/// `<project directory>/target/debug`.
pub fn get_running_executable_directory() -> Result<PathBuf> {
    let current_args = args()
        .next()
        .ok_or_else(|| miette!("Could not get first commandline argument!"))?;

    let executable_directory = dunce::canonicalize(current_args)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!("Could not canonicalize running executable path.")
        })?
        .parent()
        .ok_or_else(|| miette!("Could not get executable's directory."))?
        .to_path_buf();

    Ok(escape_cargo_target_directory(executable_directory))
}

/// Returns the project root if `executable_directory` is `<root>/target/debug`
/// and `<root>/Cargo.toml` exists, otherwise returns the directory unchanged.
fn escape_cargo_target_directory(executable_directory: PathBuf) -> PathBuf {
    if !executable_directory.ends_with("target/debug") {
        return executable_directory;
    }

    let project_directory = match executable_directory
        .parent()
        .and_then(|target_directory| target_directory.parent())
    {
        Some(directory) => directory,
        None => return executable_directory,
    };

    if project_directory.join("Cargo.toml").exists() {
        project_directory.to_path_buf()
    } else {
        executable_directory
    }
}

/// Returns the default configuration filepath if that file exists.
/// This is `./data/configuration.toml`, with (potentially) an additional `../../` escape
/// if we're running inside the `./target/debug` directory of a cargo project.
pub fn find_default_configuration_file_path() -> Result<Option<PathBuf>> {
    let mut configuration_filepath = get_running_executable_directory()
        .wrap_err_with(|| miette!("Could not get the executable directory."))?;
    configuration_filepath.push("data");
    configuration_filepath.push("configuration.toml");

    if !configuration_filepath.exists() {
        return Ok(None);
    }

    let configuration_filepath = dunce::canonicalize(configuration_filepath)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!("Could not canonicalize the configuration.toml file path.")
        })?;

    Ok(Some(configuration_filepath))
}

/// Same as [`find_default_configuration_file_path`], but a missing file is an error.
pub fn get_default_configuration_file_path() -> Result<PathBuf> {
    match find_default_configuration_file_path()? {
        Some(configuration_filepath) => Ok(configuration_filepath),
        None => {
            let mut expected_path = get_running_executable_directory()?;
            expected_path.push("data");
            expected_path.push("configuration.toml");

            Err(ConfigurationError::MissingDefaultFile {
                file_path: expected_path,
            }
            .into())
        }
    }
}
