use crate::util::error::BeaconLocateError;
use serde::{Deserialize, Serialize};

/// Sign combination of a latitude/longitude pair.
///
/// ```text
///  2 | 1
/// ---+---
///  3 | 4
/// ```
///
/// The identifier stores absolute degrees and minutes, the quadrant carries the signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// lat >= 0, lng >= 0
    NorthEast = 1,
    /// lat >= 0, lng < 0
    NorthWest = 2,
    /// lat < 0, lng < 0
    SouthWest = 3,
    /// lat < 0, lng >= 0
    SouthEast = 4,
}

impl Quadrant {
    /// Determines the quadrant from coordinate signs. Zero counts as positive.
    pub fn from_signs(latitude: f64, longitude: f64) -> Self {
        match (latitude >= 0.0, longitude >= 0.0) {
            (true, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
            (false, true) => Quadrant::SouthEast,
        }
    }

    /// The digit written into the identifier (1-4).
    pub fn digit(self) -> u8 {
        self as u8
    }

    pub fn is_south(self) -> bool {
        matches!(self, Quadrant::SouthWest | Quadrant::SouthEast)
    }

    pub fn is_west(self) -> bool {
        matches!(self, Quadrant::NorthWest | Quadrant::SouthWest)
    }

    /// Restores signs on absolute coordinates, returning `(latitude, longitude)`.
    pub fn apply(self, latitude_abs: f64, longitude_abs: f64) -> (f64, f64) {
        let latitude = if self.is_south() {
            -latitude_abs
        } else {
            latitude_abs
        };
        let longitude = if self.is_west() {
            -longitude_abs
        } else {
            longitude_abs
        };
        (latitude, longitude)
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = BeaconLocateError;

    fn try_from(digit: u8) -> Result<Self, Self::Error> {
        match digit {
            1 => Ok(Quadrant::NorthEast),
            2 => Ok(Quadrant::NorthWest),
            3 => Ok(Quadrant::SouthWest),
            4 => Ok(Quadrant::SouthEast),
            other => Err(BeaconLocateError::Format {
                field: "quadrant",
                reason: format!("expected 1-4, got {}", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signs() {
        assert_eq!(Quadrant::from_signs(51.0, 1.0), Quadrant::NorthEast);
        assert_eq!(Quadrant::from_signs(51.0, -1.0), Quadrant::NorthWest);
        assert_eq!(Quadrant::from_signs(-33.9, -70.6), Quadrant::SouthWest);
        assert_eq!(Quadrant::from_signs(-33.9, 151.2), Quadrant::SouthEast);
    }

    #[test]
    fn test_zero_is_positive() {
        assert_eq!(Quadrant::from_signs(0.0, 0.0), Quadrant::NorthEast);
        assert_eq!(Quadrant::from_signs(0.0, -0.5), Quadrant::NorthWest);
        assert_eq!(Quadrant::from_signs(-0.5, 0.0), Quadrant::SouthEast);
    }

    #[test]
    fn test_apply_restores_signs() {
        assert_eq!(Quadrant::NorthEast.apply(10.0, 20.0), (10.0, 20.0));
        assert_eq!(Quadrant::NorthWest.apply(10.0, 20.0), (10.0, -20.0));
        assert_eq!(Quadrant::SouthWest.apply(10.0, 20.0), (-10.0, -20.0));
        assert_eq!(Quadrant::SouthEast.apply(10.0, 20.0), (-10.0, 20.0));
    }

    #[test]
    fn test_digit_round_trip() -> Result<(), BeaconLocateError> {
        for digit in 1..=4u8 {
            assert_eq!(Quadrant::try_from(digit)?.digit(), digit);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_digit() {
        assert!(matches!(
            Quadrant::try_from(5),
            Err(BeaconLocateError::Format { field: "quadrant", .. })
        ));
        assert!(Quadrant::try_from(0).is_err());
    }
}
