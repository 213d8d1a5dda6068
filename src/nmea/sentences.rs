use chrono::{DateTime, Utc};

use super::format::{format_angle_dms, format_general, heading_to_nmea, split_time_and_date};
use super::package::create_package;
use crate::angle::Angle;
use crate::constants::{KNOT_TO_KMH, MS_TO_KMH, MS_TO_KNOT};
use crate::error::{NmeaError, Result};

fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NmeaError::NonFinite { field, value })
    }
}

fn ensure_finite_angle(field: &'static str, angle: Angle) -> Result<Angle> {
    if angle.is_finite() {
        Ok(angle)
    } else {
        Err(NmeaError::NonFinite {
            field,
            value: angle.rad(),
        })
    }
}

fn hemisphere(angle: Angle, positive: char, negative: char) -> char {
    if angle.is_positive() { positive } else { negative }
}

/// Track made good and ground speed (VTG).
///
/// A negative `speed` (m/s) is reported as forward motion along the
/// reciprocal track: both tracks are flipped and the speed negated.
pub fn create_vtg(track_true_north: Angle, track_magnetic: Angle, speed: f64) -> Result<String> {
    let mut track_true_north = ensure_finite_angle("track_true_north", track_true_north)?;
    let mut track_magnetic = ensure_finite_angle("track_magnetic", track_magnetic)?;
    let mut speed = ensure_finite("speed", speed)?;

    if speed < 0.0 {
        track_true_north.flip();
        track_magnetic.flip();
        speed = -speed;
    }

    let speed_kmh = speed * MS_TO_KMH;
    let payload = format!(
        "SBVTG,{:.2},T,{:.2},M,{:.2},N,{:.2},K",
        heading_to_nmea(track_true_north),
        heading_to_nmea(track_magnetic),
        speed_kmh / KNOT_TO_KMH,
        speed_kmh
    );
    Ok(create_package(&payload))
}

/// True heading (HDT)
pub fn create_hdt(heading: Angle) -> Result<String> {
    let heading = ensure_finite_angle("heading", heading)?;
    let payload = format!("SBHDT,{},T", format_general(heading_to_nmea(heading)));
    Ok(create_package(&payload))
}

/// Recommended minimum navigation information (RMC).
///
/// Hemisphere letters compare strictly against zero: a latitude, longitude
/// or magnetic variation of exactly zero is reported as `S`/`W`.
/// The status field is always `A` (valid).
pub fn create_rmc(
    time: &DateTime<Utc>,
    latitude: Angle,
    longitude: Angle,
    speed_over_ground: f64,
    track: Angle,
    magnetic_variation: Angle,
) -> Result<String> {
    let latitude = ensure_finite_angle("latitude", latitude)?;
    let longitude = ensure_finite_angle("longitude", longitude)?;
    let speed_over_ground = ensure_finite("speed_over_ground", speed_over_ground)?;
    let track = ensure_finite_angle("track", track)?;
    let magnetic_variation = ensure_finite_angle("magnetic_variation", magnetic_variation)?;

    let (time_of_day, date) = split_time_and_date(time);

    let payload = format!(
        "SBRMC,{},A,{},{},{},{},{:.1},{:.1},{},{:.1},{}",
        time_of_day,
        format_angle_dms(latitude, 2),
        hemisphere(latitude, 'N', 'S'),
        format_angle_dms(longitude, 3),
        hemisphere(longitude, 'E', 'W'),
        speed_over_ground * MS_TO_KNOT,
        heading_to_nmea(track),
        date,
        magnetic_variation.deg().abs(),
        hemisphere(magnetic_variation, 'E', 'W'),
    );
    Ok(create_package(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_time() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1556222665123).unwrap()
    }

    #[test]
    fn test_vtg() {
        let msg = create_vtg(Angle::from_deg(10.42), Angle::from_deg(15.21), 1.4).unwrap();
        assert_eq!(msg, "$SBVTG,10.42,T,15.21,M,2.72,N,5.04,K*4E");
    }

    #[test]
    fn test_vtg_negative_angles() {
        let msg = create_vtg(Angle::from_deg(-10.42), Angle::from_deg(-15.21), 1.4).unwrap();
        assert_eq!(msg, "$SBVTG,349.58,T,344.79,M,2.72,N,5.04,K*40");
    }

    #[test]
    fn test_vtg_reverse_flips_course() {
        let msg = create_vtg(Angle::from_deg(10.42), Angle::from_deg(15.21), -1.4).unwrap();
        assert_eq!(msg, "$SBVTG,190.42,T,195.21,M,2.72,N,5.04,K*4E");
    }

    #[test]
    fn test_vtg_stationary() {
        let msg = create_vtg(Angle::from_deg(90.0), Angle::from_deg(90.0), 0.0).unwrap();
        assert!(msg.starts_with("$SBVTG,90.00,T,90.00,M,0.00,N,0.00,K*"));
    }

    #[test]
    fn test_hdt() {
        assert_eq!(create_hdt(Angle::from_deg(10.42)).unwrap(), "$SBHDT,10.42,T*34");
    }

    #[test]
    fn test_hdt_negative_heading() {
        let msg = create_hdt(Angle::from_deg(-90.0)).unwrap();
        assert!(msg.starts_with("$SBHDT,270,T*"), "got {}", msg);
    }

    #[test]
    fn test_rmc() {
        let msg = create_rmc(
            &reference_time(),
            Angle::from_deg(43.2135634),
            Angle::from_deg(43.018),
            1.4,
            Angle::from_deg(10.42),
            Angle::from_deg(2.0),
        )
        .unwrap();
        assert_eq!(
            msg,
            "$SBRMC,200425.12,A,4312.813,N,04301.079,E,2.7,10.4,250419,2.0,E*63"
        );
    }

    #[test]
    fn test_rmc_zero_variation_is_west() {
        let msg = create_rmc(
            &reference_time(),
            Angle::from_deg(43.2135634),
            Angle::from_deg(43.018),
            1.4,
            Angle::from_deg(10.42),
            Angle::from_rad(0.0),
        )
        .unwrap();
        assert!(msg.contains(",250419,0.0,W*"), "got {}", msg);
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        let err = create_vtg(Angle::from_deg(f64::NAN), Angle::from_deg(0.0), 1.0).unwrap_err();
        assert!(matches!(
            err,
            NmeaError::NonFinite {
                field: "track_true_north",
                ..
            }
        ));

        let err = create_vtg(Angle::from_deg(0.0), Angle::from_deg(0.0), f64::INFINITY).unwrap_err();
        assert!(matches!(err, NmeaError::NonFinite { field: "speed", .. }));

        let err = create_hdt(Angle::from_rad(f64::NEG_INFINITY)).unwrap_err();
        assert!(matches!(err, NmeaError::NonFinite { field: "heading", .. }));

        let err = create_rmc(
            &reference_time(),
            Angle::from_deg(0.0),
            Angle::from_deg(0.0),
            f64::NAN,
            Angle::from_deg(0.0),
            Angle::from_deg(0.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            NmeaError::NonFinite {
                field: "speed_over_ground",
                ..
            }
        ));
    }
}
