//! Configuration for the sentence encoder.
//!
//! All fields have defaults, so a TOML file only needs the values it changes:
//!
//! ```toml
//! [track]
//! min_track_speed = 0.2
//! magnetic_variation_deg = -1.5
//!
//! [output]
//! sentences = ["rmc", "hdt"]
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::DEFAULT_MIN_TRACK_SPEED;
use crate::error::{NmeaError, Result};

/// NMEA sentence type emitted per vessel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SentenceKind {
    /// Recommended minimum navigation information
    Rmc,
    /// Track made good and ground speed
    Vtg,
    /// True heading
    Hdt,
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SentenceKind::Rmc => "RMC",
            SentenceKind::Vtg => "VTG",
            SentenceKind::Hdt => "HDT",
        };
        f.write_str(name)
    }
}

/// Encoder configuration
///
/// # Example
/// ```
/// use seabots_nmea::config::{EncoderConfig, SentenceKind};
///
/// let config = EncoderConfig::from_toml_str("[output]\nsentences = [\"hdt\"]").unwrap();
/// assert_eq!(config.output.sentences, vec![SentenceKind::Hdt]);
/// assert_eq!(config.track.min_track_speed, 0.1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Track and magnetic variation settings
    pub track: TrackConfig,
    /// Which sentences to produce
    pub output: OutputConfig,
}

/// Track derivation configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Speed over ground (m/s) above which the track follows the velocity
    /// vector; at or below it the vessel yaw is reported instead
    pub min_track_speed: f64,
    /// Magnetic variation in degrees, east positive
    pub magnetic_variation_deg: f64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sentences emitted per vessel state, in order
    pub sentences: Vec<SentenceKind>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            min_track_speed: DEFAULT_MIN_TRACK_SPEED,
            magnetic_variation_deg: 0.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sentences: vec![SentenceKind::Rmc, SentenceKind::Vtg, SentenceKind::Hdt],
        }
    }
}

impl EncoderConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| NmeaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| NmeaError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let min_speed = self.track.min_track_speed;
        if !min_speed.is_finite() || min_speed < 0.0 {
            return Err(NmeaError::Config(format!(
                "min_track_speed must be finite and non-negative, got {}",
                min_speed
            )));
        }
        if !self.track.magnetic_variation_deg.is_finite() {
            return Err(NmeaError::Config(
                "magnetic_variation_deg must be finite".to_string(),
            ));
        }
        if self.output.sentences.is_empty() {
            return Err(NmeaError::Config(
                "at least one sentence must be enabled".to_string(),
            ));
        }
        Ok(())
    }
}
