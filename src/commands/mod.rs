//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod distance_command;
pub mod projection_command;
pub mod scale_command;
pub mod path_command;

pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use projection_command::{Projection, ProjectionCommand};
pub use scale_command::ScaleCommand;
pub use path_command::PathCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::config::Settings;
use crate::errors::{CoordError, CoordResult};

/// Build the clap definition of the command-line interface
pub fn build_cli() -> ClapCommand {
    let coordinate_help = "Coordinate as 'lat,lon' or a configured place name";

    ClapCommand::new("coordkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Geographic coordinate toolkit")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Settings file overriding the built-in defaults")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Great-circle distance between two coordinates in meters")
                .arg(Arg::new("start").help(coordinate_help).required(true).allow_hyphen_values(true))
                .arg(Arg::new("end").help(coordinate_help).required(true).allow_hyphen_values(true)),
        )
        .subcommand(
            ClapCommand::new("normalize")
                .about("Project a latitude onto the normalized Mercator axis")
                .arg(Arg::new("value").help("Latitude in degrees").required(true).allow_hyphen_values(true)),
        )
        .subcommand(
            ClapCommand::new("denormalize")
                .about("Convert a normalized value back to a latitude")
                .arg(Arg::new("value").help("Normalized latitude").required(true).allow_hyphen_values(true)),
        )
        .subcommand(
            ClapCommand::new("scale")
                .about("Meters per degree of latitude and longitude")
                .arg(Arg::new("latitude").help("Latitude in degrees").required(true).allow_hyphen_values(true)),
        )
        .subcommand(
            ClapCommand::new("path")
                .about("Length of a path through the given coordinates")
                .arg(
                    Arg::new("coordinates")
                        .help(coordinate_help)
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("dedupe")
                        .long("dedupe")
                        .help("Drop consecutive coordinates at the same location")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Debug, Default)]
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, settings: &'a Settings) -> CoordResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, settings)?)),
            Some(("normalize", sub)) => Ok(Box::new(ProjectionCommand::new(sub, Projection::Normalize, settings)?)),
            Some(("denormalize", sub)) => Ok(Box::new(ProjectionCommand::new(sub, Projection::Denormalize, settings)?)),
            Some(("scale", sub)) => Ok(Box::new(ScaleCommand::new(sub, settings)?)),
            Some(("path", sub)) => Ok(Box::new(PathCommand::new(sub, settings)?)),
            Some((name, _)) => Err(CoordError::GenericError(format!("Unknown command: {}", name))),
            None => Err(CoordError::GenericError("Missing command".to_string())),
        }
    }
}

/// Fetch a required string argument
pub(crate) fn required_arg<'m>(args: &'m ArgMatches, name: &str) -> CoordResult<&'m str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| CoordError::GenericError(format!("Missing argument: {}", name)))
}

/// Parse a numeric argument
pub(crate) fn parse_number(value: &str) -> CoordResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CoordError::ParseError(format!("Invalid number: '{}'", value)))
}
