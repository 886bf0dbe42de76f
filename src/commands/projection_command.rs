//! Latitude normalization commands

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{parse_number, required_arg};
use crate::config::Settings;
use crate::errors::CoordResult;
use crate::geo::{denormalize_latitude, normalize_latitude};

/// Direction of the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Latitude in degrees to normalized value
    Normalize,
    /// Normalized value back to latitude in degrees
    Denormalize,
}

/// Command applying [`normalize_latitude`] or [`denormalize_latitude`]
pub struct ProjectionCommand<'a> {
    direction: Projection,
    value: f64,
    settings: &'a Settings,
}

impl<'a> ProjectionCommand<'a> {
    /// Create a new projection command
    ///
    /// # Arguments
    /// * `args` - Matches of the `normalize` or `denormalize` subcommand
    /// * `direction` - Which way to project
    /// * `settings` - Settings for output formatting
    pub fn new(args: &ArgMatches, direction: Projection, settings: &'a Settings) -> CoordResult<Self> {
        let value = parse_number(required_arg(args, "value")?)?;
        Ok(ProjectionCommand { direction, value, settings })
    }
}

impl<'a> Command for ProjectionCommand<'a> {
    fn render(&self) -> CoordResult<String> {
        let result = match self.direction {
            Projection::Normalize => normalize_latitude(self.value),
            Projection::Denormalize => denormalize_latitude(self.value),
        };
        info!("{:?} {} -> {}", self.direction, self.value, result);
        Ok(self.settings.format_value(result))
    }
}
