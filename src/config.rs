//! Settings for the command-line front end
//!
//! Defaults are embedded from `coordkit.toml` and parsed once. A user file
//! is overlaid on top: scalar values replace the defaults, places are merged.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, LevelFilter};

use crate::coordinate::{SimpleCoordinate, SimpleCoordinateFactory};
use crate::errors::{CoordError, CoordResult};
use crate::utils::parse_utils::parse_coordinate;

lazy_static! {
    // Parse the embedded defaults at first use
    static ref DEFAULT_SETTINGS: Settings = {
        let content = include_str!("../coordkit.toml");
        Settings::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse default settings: {}", e);
            Settings::default()
        })
    };
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Log file; console logging is used when absent
    pub log_file: Option<String>,
    /// Most verbose log level
    pub log_level: LevelFilter,
    /// Decimal places for printed values
    pub precision: usize,
    /// Named coordinates, keyed by lower-case name
    pub places: BTreeMap<String, SimpleCoordinate>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_file: None,
            log_level: LevelFilter::Info,
            precision: 3,
            places: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// The embedded default settings
    pub fn defaults() -> Settings {
        DEFAULT_SETTINGS.clone()
    }

    /// Parse settings from a TOML string on top of [`Settings::default`]
    pub fn from_str(content: &str) -> CoordResult<Self> {
        Settings::default().overlay(content)
    }

    /// Load a settings file and overlay it on the embedded defaults
    pub fn load<P: AsRef<Path>>(path: P) -> CoordResult<Self> {
        let path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(path)?;
        Settings::defaults().overlay(&content)
    }

    /// Apply the values of a TOML document to these settings
    pub fn overlay(mut self, content: &str) -> CoordResult<Self> {
        let toml_value: toml::Table = content
            .parse()
            .map_err(|e| CoordError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        if let Some(logging) = toml_value.get("logging") {
            if let Some(file) = logging.get("file") {
                let file = file
                    .as_str()
                    .ok_or_else(|| CoordError::ConfigError("logging.file must be a string".to_string()))?;
                self.log_file = Some(file.to_string());
            }
            if let Some(level) = logging.get("level") {
                let level = level
                    .as_str()
                    .ok_or_else(|| CoordError::ConfigError("logging.level must be a string".to_string()))?;
                self.log_level = level
                    .parse()
                    .map_err(|_| CoordError::ConfigError(format!("Unknown log level: {}", level)))?;
            }
        }

        if let Some(precision) = toml_value.get("output").and_then(|v| v.get("precision")) {
            self.precision = precision
                .as_integer()
                .and_then(|p| usize::try_from(p).ok())
                .filter(|p| *p <= 17)
                .ok_or_else(|| {
                    CoordError::ConfigError("output.precision must be an integer in 0..=17".to_string())
                })?;
        }

        if let Some(table) = toml_value.get("places").and_then(|v| v.as_table()) {
            for (name, value) in table {
                let text = value.as_str().ok_or_else(|| {
                    CoordError::ConfigError(format!("Place '{}' must be a \"lat, lon\" string", name))
                })?;
                let coordinate = parse_coordinate(text, &SimpleCoordinateFactory)
                    .map_err(|e| CoordError::ConfigError(format!("Place '{}': {}", name, e)))?;
                self.places.insert(name.to_lowercase(), coordinate);
            }
        }

        Ok(self)
    }

    /// Look up a named place, ignoring case
    pub fn place(&self, name: &str) -> Option<&SimpleCoordinate> {
        self.places.get(&name.trim().to_lowercase())
    }

    /// Resolve a place name or `"lat,lon"` text to a coordinate
    pub fn resolve_coordinate(&self, text: &str) -> CoordResult<SimpleCoordinate> {
        match self.place(text) {
            Some(coordinate) => Ok(*coordinate),
            None => parse_coordinate(text, &SimpleCoordinateFactory),
        }
    }

    /// Format a value with the configured precision
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}
