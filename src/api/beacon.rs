use crate::api::position::Position;
use crate::core::constants::{DECIMAL_PLACES, MAX_LATITUDE, MAX_LONGITUDE, MAX_SECONDS_SCALED};
use crate::core::dms::{Dms, round_to_decimals};
use crate::core::quadrant::Quadrant;
use crate::core::story::Story;
use crate::util::error::BeaconLocateError;
use crate::util::identifier::{generate_identifier, parse_identifier};
use serde::{Deserialize, Serialize};

/// The identity an iBeacon broadcasts: a UUID string plus major and minor.
///
/// # Example
///
/// ```
/// use beacon_locate::BeaconIdentity;
///
/// # fn main() -> Result<(), beacon_locate::BeaconLocateError> {
/// let beacon = BeaconIdentity::new("BE10CA7E-C001-F00D-10CA-7E0233057837", 28889, 51110);
/// let position = beacon.to_position()?;
/// assert_eq!(position.latitude, 51.12345556);
/// assert_eq!(position.longitude, -120.98765278);
/// assert_eq!(position.story.value(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeaconIdentity {
    /// 36-character UUID, fixed prefix followed by the encoded geodata
    #[serde(alias = "uuid")]
    pub identifier: String,
    /// Latitude seconds (scaled) with the story high bit in the LSB
    pub major: u16,
    /// Longitude seconds (scaled) with the story low bit in the LSB
    pub minor: u16,
}

impl BeaconIdentity {
    pub fn new(identifier: impl Into<String>, major: u16, minor: u16) -> Self {
        Self {
            identifier: identifier.into(),
            major,
            minor,
        }
    }

    /// Decodes this identity back to an approximate position.
    pub fn to_position(&self) -> Result<Position, BeaconLocateError> {
        decode(self)
    }

    /// Parses `{"uuid"|"identifier": .., "major": .., "minor": ..}`.
    pub fn from_json(s: &str) -> Result<Self, BeaconLocateError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, BeaconLocateError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Encodes a position into a beacon identity.
///
/// # Process
///
/// 1. Validates latitude/longitude ranges (story is already clamped)
/// 2. Records the quadrant and drops the signs
/// 3. Splits each axis into degrees, 5-minute boxes and seconds
/// 4. Writes quadrant, degrees and minutes into the identifier suffix
/// 5. Shifts the scaled seconds left by one and puts one story bit in each LSB
///
/// # Example
/// ```
/// use beacon_locate::{encode, Position};
///
/// # fn main() -> Result<(), beacon_locate::BeaconLocateError> {
/// let beacon = encode(&Position::new(51.0, -1.0))?;
/// assert_eq!(beacon.identifier, "BE10CA7E-C001-F00D-10CA-7E0233000100");
/// assert_eq!(beacon.major % 2, 0);
/// assert_eq!(beacon.minor % 2, 0);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`BeaconLocateError::Range`] if latitude or longitude is non-finite or out of range.
pub fn encode(position: &Position) -> Result<BeaconIdentity, BeaconLocateError> {
    position.validate()?;

    let quadrant = Quadrant::from_signs(position.latitude, position.longitude);
    let lat = Dms::from_degrees(position.latitude.abs());
    let lng = Dms::from_degrees(position.longitude.abs());

    let identifier = generate_identifier(quadrant, &lat, &lng);
    let major = (lat.seconds_scaled() << 1) | position.story.high_bit();
    let minor = (lng.seconds_scaled() << 1) | position.story.low_bit();

    tracing::debug!(
        latitude = position.latitude,
        longitude = position.longitude,
        story = position.story.value(),
        %identifier,
        major,
        minor,
        "Encoded position"
    );

    Ok(BeaconIdentity {
        identifier,
        major,
        minor,
    })
}

/// Decodes a beacon identity back to an approximate position.
///
/// Latitude and longitude come back rounded to 8 decimal places and within
/// 0.01 arc-seconds of the encoded values; the story is exact.
///
/// # Errors
///
/// [`BeaconLocateError::Format`] if the identity was not produced by [`encode`]:
/// see [`parse_identifier`](crate::parse_identifier) for the identifier checks,
/// `major`/`minor` seconds must stay inside one 5-minute box, and the combined
/// angle must not exceed 90° latitude or 180° longitude.
pub fn decode(identity: &BeaconIdentity) -> Result<Position, BeaconLocateError> {
    let fields = parse_identifier(&identity.identifier).inspect_err(|e| {
        tracing::debug!(identifier = %identity.identifier, error = %e, "Rejected identifier");
    })?;

    let lat = Dms::from_parts(
        fields.latitude_degrees,
        fields.latitude_minutes,
        scaled_seconds(identity.major, "major")?,
    );
    let lng = Dms::from_parts(
        fields.longitude_degrees,
        fields.longitude_minutes,
        scaled_seconds(identity.minor, "minor")?,
    );

    let latitude_abs = axis_degrees(&lat, MAX_LATITUDE, "latitude")?;
    let longitude_abs = axis_degrees(&lng, MAX_LONGITUDE, "longitude")?;
    let (latitude, longitude) = fields.quadrant.apply(latitude_abs, longitude_abs);

    let position = Position {
        latitude,
        longitude,
        story: Story::from_bits(identity.major, identity.minor),
    };

    tracing::debug!(
        identifier = %identity.identifier,
        latitude = position.latitude,
        longitude = position.longitude,
        story = position.story.value(),
        "Decoded beacon"
    );

    Ok(position)
}

fn scaled_seconds(value: u16, field: &'static str) -> Result<u16, BeaconLocateError> {
    let scaled = value >> 1;
    if scaled >= MAX_SECONDS_SCALED {
        return Err(BeaconLocateError::Format {
            field,
            reason: format!(
                "{} seconds steps exceed a 5-minute box ({})",
                scaled, MAX_SECONDS_SCALED
            ),
        });
    }
    Ok(scaled)
}

/// Absolute axis value rounded to the output precision, rejected above `max`.
fn axis_degrees(dms: &Dms, max: f64, field: &'static str) -> Result<f64, BeaconLocateError> {
    let value = round_to_decimals(dms.to_degrees(), DECIMAL_PLACES);
    if value > max {
        return Err(BeaconLocateError::Format {
            field,
            reason: format!("decodes to {} degrees, above {}", value, max),
        });
    }
    Ok(value)
}
