use std::path::PathBuf;
use std::process::exit;

use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::{miette, Context, Result};
use tinted::console::{ColourMode, ConsoleReporter, Level, ReporterOptions};
use tinted::TINTED_VERSION;
use tinted_configuration::Configuration;

#[derive(Subcommand)]
enum CLICommand {
    #[command(
        name = "print",
        visible_aliases(["say"]),
        about = "Print a single message at the given level."
    )]
    Print(PrintArgs),

    #[command(
        name = "show-config",
        about = "Loads the configuration and prints the effective output options."
    )]
    ShowConfig,
}

#[derive(Copy, Clone, ValueEnum)]
enum CLILevel {
    Info,
    Verbose,
    Ok,
    Warn,
    Error,
}

impl From<CLILevel> for Level {
    fn from(level: CLILevel) -> Self {
        match level {
            CLILevel::Info => Level::Info,
            CLILevel::Verbose => Level::Verbose,
            CLILevel::Ok => Level::Ok,
            CLILevel::Warn => Level::Warn,
            CLILevel::Error => Level::Error,
        }
    }
}

#[derive(Args)]
struct PrintArgs {
    #[arg(value_enum, help = "Level of the message.")]
    level: CLILevel,

    #[arg(
        required = true,
        help = "The message. Multiple arguments are joined with spaces."
    )]
    message: Vec<String>,

    #[arg(
        short = 'n',
        long = "no-newline",
        help = "Do not end the message with a newline (the output is flushed immediately)."
    )]
    no_newline: bool,
}

#[derive(Parser)]
#[command(
    name = "tinted",
    about = "Print leveled, optionally coloured messages to the console.",
    version
)]
struct CLIArgs {
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        help = "Optionally a path to your configuration file. Without this option, \
                tinted tries to load ./data/configuration.toml (relative to the binary) \
                and falls back to the built-in defaults if there is none."
    )]
    config: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Print verbose-level messages."
    )]
    verbose: bool,

    #[arg(
        long = "colour",
        visible_alias = "color",
        global = true,
        help = "Whether to colour output: auto, always or never (overrides the configuration)."
    )]
    colour: Option<ColourMode>,

    #[command(subcommand)]
    command: CLICommand,
}

/// Load and return the configuration, given the command line arguments
/// (`-c`/`--config` can override the load path).
fn get_configuration(args: &CLIArgs) -> Result<Configuration> {
    match &args.config {
        Some(path) => Configuration::load_from_path(path),
        None => Configuration::load_default_path_or_default(),
    }
}

/// Merge the configuration file with the command line flags; flags win.
fn get_reporter_options(
    args: &CLIArgs,
    configuration: &Configuration,
) -> ReporterOptions {
    let mut options = ReporterOptions::from(&configuration.output);

    options.verbose |= args.verbose;
    if let Some(colour) = args.colour {
        options.colour_mode = colour;
    }

    options
}

fn cmd_print(reporter: &ConsoleReporter, args: PrintArgs) -> Result<()> {
    let end = if args.no_newline { "" } else { "\n" };

    reporter.print(args.level.into(), args.message.join(" "), end)?;

    Ok(())
}

fn cmd_show_config(
    reporter: &ConsoleReporter,
    configuration: &Configuration,
    options: &ReporterOptions,
) -> Result<()> {
    let configuration_source = match &configuration.configuration_file_path {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    };

    reporter.info(format!("tinted {TINTED_VERSION}"))?;
    reporter.info(format!("Configuration: {configuration_source}"))?;
    reporter.info(format!("  verbose = {}", options.verbose))?;
    reporter.info(format!("  colour = {}", options.colour_mode))?;
    reporter.info(format!(
        "  show_fallback_notice = {}",
        options.show_fallback_notice
    ))?;

    let colour_state = if reporter.is_colouring() {
        "enabled"
    } else {
        "disabled"
    };
    reporter.verbose(format!("Colour output is {colour_state}."))?;

    Ok(())
}

fn run_requested_cli_command(args: CLIArgs) -> Result<()> {
    let configuration = get_configuration(&args)
        .wrap_err_with(|| miette!("Could not load configuration."))?;

    let options = get_reporter_options(&args, &configuration);
    let reporter = ConsoleReporter::new(options);

    match args.command {
        CLICommand::Print(print_args) => cmd_print(&reporter, print_args)
            .wrap_err_with(|| miette!("Failed to print message.")),
        CLICommand::ShowConfig => {
            cmd_show_config(&reporter, &configuration, &options)
                .wrap_err_with(|| miette!("Failed to print configuration."))
        }
    }
}

/// Entry function for `tinted`.
///
/// Parses CLI arguments, loads the configuration file and runs the requested command.
fn main() {
    let args = CLIArgs::parse();

    match run_requested_cli_command(args) {
        Ok(_) => exit(0),
        Err(error) => {
            eprintln!("{:?}", error);
            exit(1);
        }
    }
}
