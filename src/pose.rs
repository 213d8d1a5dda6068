use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::angle::Angle;
use crate::error::NmeaError;

/// Vessel navigation state in geodetic position and north-west-up velocity
///
/// Latitude and longitude are already geodetic; projecting from a local
/// frame happens upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselState {
    /// Sample time
    pub time: DateTime<Utc>,
    /// Geodetic latitude, north positive
    pub latitude: Angle,
    /// Geodetic longitude, east positive
    pub longitude: Angle,
    /// Velocity towards north in m/s
    pub velocity_north: f64,
    /// Velocity towards west in m/s
    pub velocity_west: f64,
    /// Vessel yaw in the north-west-up frame
    pub yaw: Angle,
}

impl VesselState {
    /// Horizontal speed in m/s (never negative)
    pub fn speed_over_ground(&self) -> f64 {
        self.velocity_north.hypot(self.velocity_west)
    }

    /// Direction of motion, or the yaw when moving at or below `min_track_speed`
    ///
    /// Measured counter-clockwise from north in the north-west-up frame, the
    /// same convention as `yaw`. This is not a compass bearing: motion due west
    /// gives +90 degrees.
    pub fn track(&self, min_track_speed: f64) -> Angle {
        let speed = self.speed_over_ground();
        if speed > min_track_speed {
            Angle::from_rad(self.velocity_west.atan2(self.velocity_north))
        } else {
            log::trace!(
                "Speed {:.3} m/s at or below {:.3} m/s, using yaw as track",
                speed,
                min_track_speed
            );
            self.yaw
        }
    }
}

/// One JSON vessel state record
///
/// ```json
/// {"time_ms": 1556222665123, "latitude_deg": 43.2135634, "longitude_deg": 43.018,
///  "velocity_north": 1.4, "velocity_west": 0.0, "yaw_deg": 0.0}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StateRecord {
    /// Milliseconds since the Unix epoch
    pub time_ms: i64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub velocity_north: f64,
    #[serde(default)]
    pub velocity_west: f64,
    #[serde(default)]
    pub yaw_deg: f64,
}

impl TryFrom<StateRecord> for VesselState {
    type Error = NmeaError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let time = DateTime::<Utc>::from_timestamp_millis(record.time_ms)
            .ok_or(NmeaError::InvalidTimestamp(record.time_ms))?;
        Ok(Self {
            time,
            latitude: Angle::from_deg(record.latitude_deg),
            longitude: Angle::from_deg(record.longitude_deg),
            velocity_north: record.velocity_north,
            velocity_west: record.velocity_west,
            yaw: Angle::from_deg(record.yaw_deg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn state(velocity_north: f64, velocity_west: f64, yaw_deg: f64) -> VesselState {
        VesselState {
            time: DateTime::from_timestamp_millis(0).unwrap(),
            latitude: Angle::from_deg(43.0),
            longitude: Angle::from_deg(7.0),
            velocity_north,
            velocity_west,
            yaw: Angle::from_deg(yaw_deg),
        }
    }

    #[test]
    fn test_speed_over_ground() {
        assert_abs_diff_eq!(state(3.0, 4.0, 0.0).speed_over_ground(), 5.0);
        assert_abs_diff_eq!(state(-3.0, -4.0, 0.0).speed_over_ground(), 5.0);
        assert_eq!(state(0.0, 0.0, 0.0).speed_over_ground(), 0.0);
    }

    #[test]
    fn test_track_follows_velocity() {
        assert_abs_diff_eq!(state(1.0, 0.0, 50.0).track(0.1).deg(), 0.0);
        // counter-clockwise: due west is +90, due east is -90
        assert_abs_diff_eq!(state(0.0, 1.0, 50.0).track(0.1).deg(), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state(-1.0, 0.0, 50.0).track(0.1).deg(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state(0.0, -1.0, 50.0).track(0.1).deg(), -90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_track_falls_back_to_yaw() {
        assert_abs_diff_eq!(state(0.05, 0.0, 50.0).track(0.1).deg(), 50.0, epsilon = 1e-9);
        // the threshold itself still uses yaw
        assert_abs_diff_eq!(state(0.1, 0.0, 50.0).track(0.1).deg(), 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state(0.05, 0.0, 50.0).track(0.0).deg(), 0.0);
    }

    #[test]
    fn test_record_conversion() {
        let record: StateRecord = serde_json::from_str(
            r#"{"time_ms": 1556222665123, "latitude_deg": -43.5, "longitude_deg": 172.25, "velocity_north": 1.0}"#,
        )
        .unwrap();
        let state = VesselState::try_from(record).unwrap();
        assert_eq!(state.time.timestamp_millis(), 1556222665123);
        assert_abs_diff_eq!(state.latitude.deg(), -43.5, epsilon = 1e-9);
        assert_abs_diff_eq!(state.longitude.deg(), 172.25, epsilon = 1e-9);
        assert_eq!(state.velocity_west, 0.0);
        assert_eq!(state.yaw.rad(), 0.0);
    }

    #[test]
    fn test_record_out_of_range_time() {
        let record = StateRecord {
            time_ms: i64::MAX,
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            velocity_north: 0.0,
            velocity_west: 0.0,
            yaw_deg: 0.0,
        };
        assert!(matches!(
            VesselState::try_from(record),
            Err(NmeaError::InvalidTimestamp(i64::MAX))
        ));
    }
}
