use chrono::{DateTime, Utc};

use crate::angle::Angle;

/// Significant digits used by [`format_general`]
const GENERAL_PRECISION: usize = 6;

/// Split an instant into NMEA `HHMMSS.CC` time of day and `DDMMYY` date, UTC.
///
/// Centiseconds are truncated, not rounded: 20:04:25.129 gives `200425.12`.
pub fn split_time_and_date(time: &DateTime<Utc>) -> (String, String) {
    let centiseconds = (time.timestamp_subsec_millis() / 10) % 100;
    let time_of_day = format!("{}.{:02}", time.format("%H%M%S"), centiseconds);
    let date = time.format("%d%m%y").to_string();
    (time_of_day, date)
}

/// Format the magnitude of an angle as `D..DMM.fff` (degrees, minutes,
/// thousandths of a minute).
///
/// The degree field is zero-padded to `degree_width` digits (2 for latitude,
/// 3 for longitude). The sign is dropped; callers pick the hemisphere letter.
///
/// The fractional thousandths come from the arc-minute value before the whole
/// arc-minutes are rounded, and are truncated.
pub fn format_angle_dms(angle: Angle, degree_width: usize) -> String {
    let arc_minutes = (angle.deg() * 60.0).abs();
    let fraction = arc_minutes.fract();
    let whole = arc_minutes.trunc().round() as u64;

    let degrees = whole / 60;
    let minutes = whole % 60;
    let thousandths = (fraction * 1000.0) as u32;

    format!(
        "{:0width$}{:02}.{:03}",
        degrees,
        minutes,
        thousandths,
        width = degree_width
    )
}

/// Map an angle to an NMEA course/heading in [0, 360) degrees
pub fn heading_to_nmea(angle: Angle) -> f64 {
    let deg = angle.deg();
    if deg == 0.0 {
        // folds -0.0 too
        0.0
    } else if deg < 0.0 {
        let wrapped = deg + 360.0;
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    } else {
        deg
    }
}

/// Render a float like C's `%g`: six significant digits, trailing zeros
/// trimmed, exponent notation outside [1e-4, 1e6).
///
/// # Example
/// ```
/// use seabots_nmea::nmea::format_general;
///
/// assert_eq!(format_general(10.420000000000002), "10.42");
/// assert_eq!(format_general(349.58), "349.58");
/// assert_eq!(format_general(90.0), "90");
/// ```
pub fn format_general(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", GENERAL_PRECISION - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= GENERAL_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (GENERAL_PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
