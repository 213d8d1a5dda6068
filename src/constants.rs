//! Unit conversion constants for NMEA speed fields
//!
//! NMEA reports speeds in knots and km/h while vessel state carries m/s.

/// Multiply a speed in knots by this to get km/h.
/// Exact: the knot is defined as 1.852 km/h.
pub const KNOT_TO_KMH: f64 = 1.852;

/// Multiply a speed in m/s by this to get km/h.
pub const MS_TO_KMH: f64 = 3.6;

/// Multiply a speed in m/s by this to get knots.
pub const MS_TO_KNOT: f64 = MS_TO_KMH / KNOT_TO_KMH;

/// Speed over ground below which the track falls back to the vessel yaw (m/s).
pub const DEFAULT_MIN_TRACK_SPEED: f64 = 0.1;
