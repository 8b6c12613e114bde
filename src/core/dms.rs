use crate::core::constants::{MAX_SECONDS_SCALED, MINUTE_BOX, SECONDS_RESOLUTION};

/// Degrees/minutes/seconds decomposition of an absolute coordinate.
///
/// Minutes are always a multiple of [`MINUTE_BOX`]; the remainder lives in
/// `seconds`, which therefore ranges over `[0, 300)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u8,
    pub minutes: u8,
    pub seconds: f64,
}

impl Dms {
    /// Splits an absolute coordinate in decimal degrees and folds the minutes
    /// into a 5-minute box.
    ///
    /// # Example
    /// ```
    /// use beacon_locate::Dms;
    ///
    /// let dms = Dms::from_degrees(51.123456);
    /// assert_eq!(dms.degrees, 51);
    /// assert_eq!(dms.minutes, 5);
    /// assert!((dms.seconds - 144.4416).abs() < 1e-6);
    /// ```
    pub fn from_degrees(value: f64) -> Self {
        let degrees = value.floor();
        let minutes = ((value - degrees) * 60.0).floor().min(59.0);
        let mut seconds = (value - degrees - minutes / 60.0) * 3600.0;

        let remainder = minutes % MINUTE_BOX as f64;
        seconds += remainder * 60.0;
        let minutes = minutes - remainder;

        Self {
            degrees: degrees as u8,
            minutes: minutes as u8,
            seconds,
        }
    }

    /// Rebuilds a decomposition from identifier bytes and a scaled seconds value.
    pub fn from_parts(degrees: u8, minutes: u8, scaled_seconds: u16) -> Self {
        Self {
            degrees,
            minutes,
            seconds: scaled_seconds as f64 * SECONDS_RESOLUTION,
        }
    }

    /// Seconds as whole multiples of [`SECONDS_RESOLUTION`], truncated.
    ///
    /// Float noise can push the seconds a hair outside `[0, 300)`; the result is
    /// held to `0..MAX_SECONDS_SCALED` so every encoded value decodes.
    pub fn seconds_scaled(&self) -> u16 {
        let steps = (self.seconds / SECONDS_RESOLUTION).floor().max(0.0);
        steps.min((MAX_SECONDS_SCALED - 1) as f64) as u16
    }

    /// Converts back to decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }
}

/// Rounds to a fixed number of decimal places.
pub fn round_to_decimals(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
