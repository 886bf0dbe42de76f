//! Great-circle distance command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::config::Settings;
use crate::coordinate::{CoordinatePair, SimpleCoordinate};
use crate::errors::CoordResult;

/// Command printing the distance between two coordinates in meters
pub struct DistanceCommand<'a> {
    /// Start and end of the measured segment
    pair: CoordinatePair<SimpleCoordinate>,
    /// Settings for output formatting
    settings: &'a Settings,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - Matches of the `distance` subcommand
    /// * `settings` - Settings used to resolve places and format output
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> CoordResult<Self> {
        let start = settings.resolve_coordinate(required_arg(args, "start")?)?;
        let end = settings.resolve_coordinate(required_arg(args, "end")?)?;

        Ok(DistanceCommand {
            pair: CoordinatePair::new(start, end),
            settings,
        })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn render(&self) -> CoordResult<String> {
        let meters = self.pair.distance_meters();
        info!("Distance for {}: {} m", self.pair, meters);
        Ok(format!("{} m", self.settings.format_value(meters)))
    }
}
