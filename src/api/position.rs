use crate::api::beacon::{BeaconIdentity, encode};
use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::core::story::Story;
use crate::util::coord::Coordinate;
use crate::util::error::BeaconLocateError;
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A geographic position with an optional story (floor) indicator.
///
/// # Example
///
/// ```
/// use beacon_locate::Position;
///
/// # fn main() -> Result<(), beacon_locate::BeaconLocateError> {
/// let position = Position::new(51.123456, -120.987654).with_story(2);
/// let beacon = position.to_beacon()?;
/// assert_eq!(beacon.identifier, "BE10CA7E-C001-F00D-10CA-7E0233057837");
/// assert_eq!((beacon.major, beacon.minor), (28889, 51110));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in decimal degrees, `[-90, 90]`
    pub latitude: f64,
    /// Longitude in decimal degrees, `[-180, 180]`
    pub longitude: f64,
    /// Story 0-3, clamped on construction and deserialization
    #[serde(default)]
    pub story: Story,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            story: Story::GROUND,
        }
    }

    /// Sets the story, clamping to `0..=3`.
    pub fn with_story(mut self, story: i64) -> Self {
        let clamped = Story::clamp(story);
        if clamped.value() as i64 != story {
            tracing::warn!(story, clamped = clamped.value(), "Story out of range, clamped");
        }
        self.story = clamped;
        self
    }

    /// Create a Position from a lon/lat coordinate (tuple, `Point` or `Coord`)
    ///
    /// # Example
    /// ```
    /// use beacon_locate::Position;
    /// use geo_types::Point;
    ///
    /// let from_tuple = Position::from_coord(&(-1.0, 51.0));
    /// let from_point = Position::from_coord(&Point::new(-1.0, 51.0));
    /// assert_eq!(from_tuple, from_point);
    /// assert_eq!(from_tuple.latitude, 51.0);
    /// ```
    pub fn from_coord(coord: &impl Coordinate) -> Self {
        Self::new(coord.y(), coord.x())
    }

    /// Checks latitude and longitude are finite and inside their ranges.
    ///
    /// # Errors
    ///
    /// [`BeaconLocateError::Range`] naming the offending field.
    pub fn validate(&self) -> Result<(), BeaconLocateError> {
        check_range("latitude", self.latitude, MAX_LATITUDE)?;
        check_range("longitude", self.longitude, MAX_LONGITUDE)?;
        Ok(())
    }

    /// Returns the position as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Encodes this position into a beacon identity.
    pub fn to_beacon(&self) -> Result<BeaconIdentity, BeaconLocateError> {
        encode(self)
    }
}

impl Coordinate for Position {
    fn x(&self) -> f64 {
        self.longitude
    }
    fn y(&self) -> f64 {
        self.latitude
    }
}

fn check_range(field: &'static str, value: f64, max: f64) -> Result<(), BeaconLocateError> {
    if !value.is_finite() || value.abs() > max {
        return Err(BeaconLocateError::Range { field, value });
    }
    Ok(())
}

/// W3C geolocation style wrapper: `{"coords": {"latitude": .., "longitude": .., "story": ..}}`.
///
/// Browser geolocation results can be passed straight in; extra fields such as
/// `accuracy` or `timestamp` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeolocationPosition {
    pub coords: Position,
}

impl GeolocationPosition {
    /// Parses a geolocation JSON document.
    ///
    /// # Example
    /// ```
    /// use beacon_locate::GeolocationPosition;
    ///
    /// # fn main() -> Result<(), beacon_locate::BeaconLocateError> {
    /// let geo = GeolocationPosition::from_json(
    ///     r#"{"coords":{"latitude":51.0,"longitude":-1.0,"accuracy":12.0},"timestamp":0}"#,
    /// )?;
    /// assert_eq!(geo.coords.story.value(), 0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(s: &str) -> Result<Self, BeaconLocateError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, BeaconLocateError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Position> for GeolocationPosition {
    fn from(coords: Position) -> Self {
        Self { coords }
    }
}

impl From<GeolocationPosition> for Position {
    fn from(geo: GeolocationPosition) -> Self {
        geo.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_story_clamps() {
        assert_eq!(Position::new(0.0, 0.0).with_story(5).story.value(), 3);
        assert_eq!(Position::new(0.0, 0.0).with_story(-2).story.value(), 0);
        assert_eq!(Position::new(0.0, 0.0).with_story(1).story.value(), 1);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(Position::new(90.0, 180.0).validate().is_ok());
        assert!(Position::new(-90.0, -180.0).validate().is_ok());
        assert!(matches!(
            Position::new(90.5, 0.0).validate(),
            Err(BeaconLocateError::Range { field: "latitude", .. })
        ));
        assert!(matches!(
            Position::new(0.0, -180.5).validate(),
            Err(BeaconLocateError::Range { field: "longitude", .. })
        ));
        assert!(Position::new(f64::NAN, 0.0).validate().is_err());
        assert!(Position::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_to_point_axis_order() {
        let pt = Position::new(51.0, -1.0).to_point();
        assert_eq!(pt.x(), -1.0);
        assert_eq!(pt.y(), 51.0);
    }

    #[test]
    fn test_deserialize_without_story() -> Result<(), BeaconLocateError> {
        let pos: Position = serde_json::from_str(r#"{"latitude":1.5,"longitude":2.5}"#)?;
        assert_eq!(pos, Position::new(1.5, 2.5));
        Ok(())
    }

    #[test]
    fn test_geolocation_story_written_as_float() -> Result<(), BeaconLocateError> {
        let geo = GeolocationPosition::from_json(
            r#"{"coords":{"latitude":51.0,"longitude":-1.0,"story":2.0}}"#,
        )?;
        assert_eq!(geo.coords.story.value(), 2);
        Ok(())
    }

    #[test]
    fn test_geolocation_json_round_trip() -> Result<(), BeaconLocateError> {
        let geo = GeolocationPosition::from_json(
            r#"{"coords":{"latitude":51.123456,"longitude":-120.987654,"story":9}}"#,
        )?;
        assert_eq!(geo.coords.story.value(), 3);

        let json = geo.to_json()?;
        assert!(json.contains("\"coords\""));
        assert_eq!(GeolocationPosition::from_json(&json)?, geo);
        Ok(())
    }
}
