//! Coordinate text parsing
//!
//! Accepts `"lat,lon"` with optional whitespace around either value, which
//! includes the `"<lat>, <lon>"` form produced by
//! [`Coordinate::to_display_string`](crate::coordinate::Coordinate::to_display_string).

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::CoordinateFactory;
use crate::errors::{CoordError, CoordResult};

lazy_static! {
    static ref COORDINATE_PATTERN: Regex =
        Regex::new(r"^\s*([^,\s]+)\s*,\s*([^,\s]+)\s*$").expect("coordinate pattern is valid");
}

/// Parse `"lat,lon"` into a coordinate built by `factory`
///
/// # Arguments
/// * `text` - Coordinate text, latitude first
/// * `factory` - Factory producing the resulting coordinate
///
/// # Returns
/// The parsed coordinate or a [`CoordError::ParseError`]
pub fn parse_coordinate<F>(text: &str, factory: &F) -> CoordResult<F::Output>
where
    F: CoordinateFactory + ?Sized,
{
    let captures = COORDINATE_PATTERN.captures(text).ok_or_else(|| {
        CoordError::ParseError(format!("Coordinate must be in format 'lat,lon': '{}'", text))
    })?;

    let latitude = parse_degrees(&captures[1], "latitude")?;
    let longitude = parse_degrees(&captures[2], "longitude")?;

    debug!("Parsed coordinate '{}' as lat={}, lon={}", text, latitude, longitude);
    Ok(factory.create(latitude, longitude))
}

fn parse_degrees(value: &str, axis: &str) -> CoordResult<f64> {
    value
        .parse::<f64>()
        .map_err(|_| CoordError::ParseError(format!("Invalid {} value: '{}'", axis, value)))
}
