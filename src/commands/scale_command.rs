//! Degree length command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::{parse_number, required_arg};
use crate::config::Settings;
use crate::errors::CoordResult;
use crate::geo::{latitude_degree_length_meters, longitude_degree_length_meters};

/// Command printing the meters covered by one degree at a latitude
pub struct ScaleCommand<'a> {
    latitude: f64,
    settings: &'a Settings,
}

impl<'a> ScaleCommand<'a> {
    /// Create a new scale command
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> CoordResult<Self> {
        let latitude = parse_number(required_arg(args, "latitude")?)?;
        Ok(ScaleCommand { latitude, settings })
    }
}

impl<'a> Command for ScaleCommand<'a> {
    fn render(&self) -> CoordResult<String> {
        Ok(format!(
            "latitude: {} m/deg\nlongitude: {} m/deg",
            self.settings.format_value(latitude_degree_length_meters()),
            self.settings.format_value(longitude_degree_length_meters(self.latitude))
        ))
    }
}
