//! Mercator-style latitude normalization
//!
//! A normalized latitude can be used like a y value next to the longitude as
//! x, both spanning [-180, 180].

use std::f64::consts::PI;
use log::debug;

const RAD_PER_DEG: f64 = PI / 180.0;
const TWO_PI: f64 = 2.0 * PI;
const NINETY_PER_PI: f64 = 90.0 / PI;
const THREE_SIXTY_PER_PI: f64 = 360.0 / PI;

/// Normalize a latitude in degrees onto the Mercator y axis, clamped to [-180, 180]
///
/// The poles saturate before the logarithm is taken: `90` and above map to
/// `180`, `-90` and below map to `-180`. Latitudes beyond roughly ±85.0511°
/// also reach the clamp. NaN propagates.
pub fn normalize_latitude(latitude: f64) -> f64 {
    if latitude >= 90.0 {
        debug!("Latitude {} saturates to 180", latitude);
        return 180.0;
    }
    if latitude <= -90.0 {
        debug!("Latitude {} saturates to -180", latitude);
        return -180.0;
    }

    let sinus = (latitude * RAD_PER_DEG).sin();
    let normalized = NINETY_PER_PI * ((1.0 + sinus) / (1.0 - sinus)).ln();
    normalized.clamp(-180.0, 180.0)
}

/// Revert [`normalize_latitude`]
///
/// Exact inverse for normalized values inside [-180, 180]; `180` maps back to
/// roughly 85.0511°.
pub fn denormalize_latitude(normalized: f64) -> f64 {
    let y = normalized / 360.0;
    90.0 - THREE_SIXTY_PER_PI * (-y * TWO_PI).exp().atan()
}
