pub use structure::*;

pub mod error;
mod structure;
mod traits;
mod utilities;

pub use utilities::{
    find_default_configuration_file_path,
    get_default_configuration_file_path,
    get_running_executable_directory,
};
