//! Path length command

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::config::Settings;
use crate::errors::{CoordError, CoordResult};
use crate::geo::path_length_meters;
use crate::list::{CoordinateList, CoordinateListFactory, VecCoordinateList, VecCoordinateListFactory};
use crate::coordinate::SimpleCoordinate;

/// Command printing the length of a path through several coordinates
pub struct PathCommand<'a> {
    /// Path vertices in order
    coordinates: VecCoordinateList<SimpleCoordinate>,
    /// Whether to drop consecutive duplicates before measuring
    dedupe: bool,
    settings: &'a Settings,
}

impl<'a> PathCommand<'a> {
    /// Create a new path command
    ///
    /// # Arguments
    /// * `args` - Matches of the `path` subcommand
    /// * `settings` - Settings used to resolve places and format output
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> CoordResult<Self> {
        let values = args
            .get_many::<String>("coordinates")
            .ok_or_else(|| CoordError::GenericError("Missing path coordinates".to_string()))?;

        let mut coordinates = VecCoordinateListFactory::<SimpleCoordinate>::new().create_with_capacity(values.len());
        for value in values {
            coordinates.push(settings.resolve_coordinate(value)?)?;
        }

        Ok(PathCommand {
            coordinates,
            dedupe: args.get_flag("dedupe"),
            settings,
        })
    }
}

impl<'a> Command for PathCommand<'a> {
    fn render(&self) -> CoordResult<String> {
        let mut coordinates = self.coordinates.clone();
        if self.dedupe {
            let removed = coordinates.remove_consecutive_duplicates()?;
            debug!("Dropped {} duplicate vertices", removed);
        }

        let meters = path_length_meters(&coordinates);
        info!("Path of {} vertices: {} m", coordinates.len(), meters);
        Ok(format!(
            "{} m over {} vertices",
            self.settings.format_value(meters),
            coordinates.len()
        ))
    }
}
