use std::f64::consts::PI;
use std::fmt;
use std::ops::Neg;

/// Planar angle, stored in radians canonicalised to (-pi, pi]
///
/// Degree and radian views are always two renderings of the same stored value.
/// Values already inside the canonical interval are kept untouched, so
/// `Angle::from_deg(d).deg()` only carries the rounding of the degree/radian
/// conversion itself.
///
/// # Example
/// ```
/// use seabots_nmea::Angle;
///
/// let heading = Angle::from_deg(370.0);
/// assert!((heading.deg() - 10.0).abs() < 1e-9);
///
/// let reverse = heading.flipped();
/// assert!((reverse.deg() + 170.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Create from radians, any real value
    pub fn from_rad(rad: f64) -> Self {
        Self {
            rad: normalize_rad(rad),
        }
    }

    /// Create from degrees, any real value
    pub fn from_deg(deg: f64) -> Self {
        Self::from_rad(deg / 180.0 * PI)
    }

    /// Get radians in (-pi, pi]
    pub fn rad(&self) -> f64 {
        self.rad
    }

    /// Get degrees in (-180, 180]
    pub fn deg(&self) -> f64 {
        self.rad / PI * 180.0
    }

    /// Rotate by half a turn in place
    pub fn flip(&mut self) {
        self.rad = normalize_rad(self.rad + PI);
    }

    /// Copy rotated by half a turn
    pub fn flipped(self) -> Self {
        Self::from_rad(self.rad + PI)
    }

    /// Strictly positive. Zero is not positive.
    pub fn is_positive(&self) -> bool {
        self.rad > 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.rad.is_finite()
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_rad(-self.rad)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}°", self.deg())
    }
}

fn normalize_rad(rad: f64) -> f64 {
    if rad > PI || rad <= -PI {
        let mut wrapped = (rad / (2.0 * PI)).fract() * 2.0 * PI;
        if wrapped > PI {
            wrapped -= 2.0 * PI;
        }
        if wrapped <= -PI {
            wrapped += 2.0 * PI;
        }
        wrapped
    } else {
        rad
    }
}
