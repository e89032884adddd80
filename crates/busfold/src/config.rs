//! Configuration types for fan-out generation.
//!
//! This module provides the configuration structures that control the
//! geometry of generated fragments. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`GenerationConfig`] - Numeric geometry settings for the generator.
//!
//! # Example
//!
//! ```
//! # use busfold::config::GenerationConfig;
//! // Use the stock Eeschema-friendly defaults
//! let config = GenerationConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.spacing(), 2.54);
//! ```

use serde::Deserialize;

use crate::error::ValidationError;

/// Default vertical distance between consecutive signal wires, in mm.
pub const DEFAULT_SPACING: f64 = 2.54;

/// Default horizontal length of each signal wire, in mm.
pub const DEFAULT_CONNECTION_LENGTH: f64 = 10.16;

/// Default x-coordinate of the first bus's label anchor, in mm.
pub const DEFAULT_START_X: f64 = 194.31;

/// Default y-coordinate of the bus label anchors, in mm.
pub const DEFAULT_START_Y: f64 = 49.53;

/// Default horizontal gap added between successive buses, in mm.
pub const DEFAULT_BUS_PITCH: f64 = 25.0;

/// Top-level application configuration.
///
/// Groups the generation settings under one configuration root so the
/// file format has room to grow.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generation geometry section.
    #[serde(default)]
    generation: GenerationConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified generation settings.
    pub fn new(generation: GenerationConfig) -> Self {
        Self { generation }
    }

    /// Returns the generation configuration.
    pub fn generation(&self) -> &GenerationConfig {
        &self.generation
    }

    /// Consumes the config, returning the generation settings.
    pub fn into_generation(self) -> GenerationConfig {
        self.generation
    }
}

/// Numeric geometry settings for fan-out generation.
///
/// All values are millimetres in sheet coordinates. `spacing` and
/// `connection_length` must be positive finite numbers; [`validate`]
/// checks this before any generation runs, since non-positive values
/// would produce degenerate, overlapping geometry.
///
/// [`validate`]: GenerationConfig::validate
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Vertical distance between consecutive signal wires in a fan-out.
    spacing: f64,

    /// Horizontal length of each per-signal wire segment.
    connection_length: f64,

    /// Anchor x-coordinate of the first bus's hierarchical label.
    start_x: f64,

    /// Anchor y-coordinate shared by every bus's hierarchical label.
    start_y: f64,

    /// Horizontal distance added between successive buses' anchors, on
    /// top of the connection length.
    bus_pitch: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            connection_length: DEFAULT_CONNECTION_LENGTH,
            start_x: DEFAULT_START_X,
            start_y: DEFAULT_START_Y,
            bus_pitch: DEFAULT_BUS_PITCH,
        }
    }
}

impl GenerationConfig {
    /// Returns the vertical wire spacing.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the horizontal wire length.
    pub fn connection_length(&self) -> f64 {
        self.connection_length
    }

    /// Returns the anchor x-coordinate of the first bus.
    pub fn start_x(&self) -> f64 {
        self.start_x
    }

    /// Returns the anchor y-coordinate.
    pub fn start_y(&self) -> f64 {
        self.start_y
    }

    /// Returns the horizontal gap added between successive buses.
    pub fn bus_pitch(&self) -> f64 {
        self.bus_pitch
    }

    /// Returns the anchor step between one bus and the next.
    pub fn anchor_step(&self) -> f64 {
        self.connection_length + self.bus_pitch
    }

    /// Replaces the vertical wire spacing (builder style).
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Replaces the horizontal wire length (builder style).
    pub fn with_connection_length(mut self, connection_length: f64) -> Self {
        self.connection_length = connection_length;
        self
    }

    /// Replaces the anchor x-coordinate (builder style).
    pub fn with_start_x(mut self, start_x: f64) -> Self {
        self.start_x = start_x;
        self
    }

    /// Replaces the anchor y-coordinate (builder style).
    pub fn with_start_y(mut self, start_y: f64) -> Self {
        self.start_y = start_y;
        self
    }

    /// Replaces the bus pitch (builder style).
    pub fn with_bus_pitch(mut self, bus_pitch: f64) -> Self {
        self.bus_pitch = bus_pitch;
        self
    }

    /// Checks that every field the layout math depends on is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNumber`] naming the first field
    /// whose value is not a positive finite number (`spacing`,
    /// `connection_length`) or not finite (`start_x`, `start_y`,
    /// `bus_pitch`).
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("spacing", self.spacing),
            ("connection_length", self.connection_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidNumber { field, value });
            }
        }

        for (field, value) in [
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("bus_pitch", self.bus_pitch),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::InvalidNumber { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(GenerationConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let err = GenerationConfig::default()
            .with_spacing(0.0)
            .validate()
            .expect_err("zero spacing is degenerate");
        assert!(err.to_string().contains("spacing"));
    }

    #[test]
    fn negative_connection_length_is_rejected() {
        let config = GenerationConfig::default().with_connection_length(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn nan_start_is_rejected() {
        let config = GenerationConfig::default().with_start_x(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_partial_toml_shape() {
        // Serde fills unspecified fields from the defaults.
        let source = "[generation]\nspacing = 1.27\n";
        let config: AppConfig = toml::from_str(source).expect("partial config should deserialize");
        assert_eq!(config.generation().spacing(), 1.27);
        assert_eq!(
            config.generation().connection_length(),
            DEFAULT_CONNECTION_LENGTH
        );
    }
}
