use crate::core::constants::{
    HYPHEN_POSITIONS, IDENTIFIER_LENGTH, IDENTIFIER_PREFIX, LAT_DEGREES_OFFSET, LAT_MINUTES_OFFSET,
    LNG_DEGREES_OFFSET, LNG_MINUTES_OFFSET, MAX_LATITUDE, MAX_LONGITUDE, MINUTE_BOX,
    QUADRANT_OFFSET,
};
use crate::core::dms::Dms;
use crate::core::quadrant::Quadrant;
use crate::util::error::BeaconLocateError;

/// Geodata carried by the last ten characters of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierFields {
    pub quadrant: Quadrant,
    pub latitude_degrees: u8,
    pub latitude_minutes: u8,
    pub longitude_degrees: u8,
    pub longitude_minutes: u8,
}

/// Builds the 36-character beacon UUID from a quadrant and two boxed decompositions.
///
/// # Format
///
/// | Offset | Size | Field             | Encoding                         |
/// |--------|------|-------------------|----------------------------------|
/// | 0      | 26   | Prefix            | `BE10CA7E-C001-F00D-10CA-7E`     |
/// | 26     | 2    | Quadrant          | `0` followed by the digit 1-4    |
/// | 28     | 2    | Latitude degrees  | uppercase hex                    |
/// | 30     | 2    | Latitude minutes  | uppercase hex, multiple of 5     |
/// | 32     | 2    | Longitude degrees | uppercase hex                    |
/// | 34     | 2    | Longitude minutes | uppercase hex, multiple of 5     |
///
/// # Example
/// ```
/// use beacon_locate::{generate_identifier, Dms, Quadrant};
///
/// let id = generate_identifier(
///     Quadrant::NorthWest,
///     &Dms::from_degrees(51.0),
///     &Dms::from_degrees(1.0),
/// );
/// assert_eq!(id, "BE10CA7E-C001-F00D-10CA-7E0233000100");
/// ```
pub fn generate_identifier(quadrant: Quadrant, latitude: &Dms, longitude: &Dms) -> String {
    format!(
        "{}0{}{:02X}{:02X}{:02X}{:02X}",
        IDENTIFIER_PREFIX,
        quadrant.digit(),
        latitude.degrees,
        latitude.minutes,
        longitude.degrees,
        longitude.minutes,
    )
}

/// Parses and validates a beacon UUID produced by [`generate_identifier`].
///
/// Colon separators are stripped before parsing. Hex digits may be in either case.
///
/// The fields are read from the same offsets the encoder writes to
/// (26, 28, 30, 32, 34). Earlier decoders in the wild read the degree and minute
/// groups two characters early and took the quadrant from the hyphen position,
/// so their output did not invert the encoding; those offsets are not supported.
///
/// # Errors
///
/// [`BeaconLocateError::Format`] naming the offending field when the identifier
/// has the wrong length or hyphen layout, a foreign prefix, a quadrant outside
/// `01`-`04`, non-hex data, or degrees/minutes the encoder cannot produce.
pub fn parse_identifier(identifier: &str) -> Result<IdentifierFields, BeaconLocateError> {
    let normalized: String = identifier.chars().filter(|c| *c != ':').collect();

    if !normalized.is_ascii() || normalized.len() != IDENTIFIER_LENGTH {
        return Err(BeaconLocateError::Format {
            field: "identifier",
            reason: format!(
                "expected {} ASCII characters, got '{}'",
                IDENTIFIER_LENGTH, normalized
            ),
        });
    }

    let bytes = normalized.as_bytes();
    for pos in HYPHEN_POSITIONS {
        if bytes[pos] != b'-' {
            return Err(BeaconLocateError::Format {
                field: "identifier",
                reason: format!("expected '-' at position {}", pos),
            });
        }
    }

    let prefix = &normalized[..QUADRANT_OFFSET];
    if !prefix.eq_ignore_ascii_case(IDENTIFIER_PREFIX) {
        return Err(BeaconLocateError::Format {
            field: "prefix",
            reason: format!("expected '{}', got '{}'", IDENTIFIER_PREFIX, prefix),
        });
    }

    let quadrant = parse_quadrant(group(&normalized, QUADRANT_OFFSET))?;

    let latitude_degrees = hex_byte(group(&normalized, LAT_DEGREES_OFFSET), "latitude_degrees")?;
    let latitude_minutes = hex_byte(group(&normalized, LAT_MINUTES_OFFSET), "latitude_minutes")?;
    let longitude_degrees =
        hex_byte(group(&normalized, LNG_DEGREES_OFFSET), "longitude_degrees")?;
    let longitude_minutes =
        hex_byte(group(&normalized, LNG_MINUTES_OFFSET), "longitude_minutes")?;

    check_degrees(latitude_degrees, MAX_LATITUDE, "latitude_degrees")?;
    check_degrees(longitude_degrees, MAX_LONGITUDE, "longitude_degrees")?;
    check_minutes(latitude_minutes, "latitude_minutes")?;
    check_minutes(longitude_minutes, "longitude_minutes")?;

    Ok(IdentifierFields {
        quadrant,
        latitude_degrees,
        latitude_minutes,
        longitude_degrees,
        longitude_minutes,
    })
}

fn group(s: &str, offset: usize) -> &str {
    &s[offset..offset + 2]
}

fn parse_quadrant(s: &str) -> Result<Quadrant, BeaconLocateError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BeaconLocateError::Format {
            field: "quadrant",
            reason: format!("expected decimal digits, got '{}'", s),
        });
    }
    let digit: u8 = s.parse().map_err(|_| BeaconLocateError::Format {
        field: "quadrant",
        reason: format!("invalid quadrant '{}'", s),
    })?;
    Quadrant::try_from(digit)
}

fn hex_byte(s: &str, field: &'static str) -> Result<u8, BeaconLocateError> {
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BeaconLocateError::Format {
            field,
            reason: format!("expected two hex digits, got '{}'", s),
        });
    }
    u8::from_str_radix(s, 16).map_err(|e| BeaconLocateError::Format {
        field,
        reason: e.to_string(),
    })
}

fn check_degrees(value: u8, max: f64, field: &'static str) -> Result<(), BeaconLocateError> {
    if value as f64 > max {
        return Err(BeaconLocateError::Format {
            field,
            reason: format!("{} exceeds {}", value, max),
        });
    }
    Ok(())
}

fn check_minutes(value: u8, field: &'static str) -> Result<(), BeaconLocateError> {
    if value >= 60 || value % MINUTE_BOX != 0 {
        return Err(BeaconLocateError::Format {
            field,
            reason: format!("{} is not a {}-minute box below 60", value, MINUTE_BOX),
        });
    }
    Ok(())
}
