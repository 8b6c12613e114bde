/// Fixed identifier prefix shared by every encoded beacon.
///
/// Already carries the hyphens of the 8-4-4-4-12 UUID layout, so the encoded
/// suffix lands entirely inside the last group.
pub const IDENTIFIER_PREFIX: &str = "BE10CA7E-C001-F00D-10CA-7E";

/// Total identifier length in characters.
pub const IDENTIFIER_LENGTH: usize = 36;

/// Character positions of the UUID group separators.
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Offset of the quadrant group, written as `0` plus the digit 1-4.
pub const QUADRANT_OFFSET: usize = 26;

/// Offset of the latitude degrees hex byte.
pub const LAT_DEGREES_OFFSET: usize = 28;

/// Offset of the latitude minutes hex byte.
pub const LAT_MINUTES_OFFSET: usize = 30;

/// Offset of the longitude degrees hex byte.
pub const LNG_DEGREES_OFFSET: usize = 32;

/// Offset of the longitude minutes hex byte.
pub const LNG_MINUTES_OFFSET: usize = 34;

/// Minutes are stored in boxes of this width, the remainder moves to seconds.
pub const MINUTE_BOX: u8 = 5;

/// Arc-seconds represented by one step of the major/minor value.
pub const SECONDS_RESOLUTION: f64 = 0.01;

/// Exclusive upper bound of scaled seconds: a 5-minute box holds 300 seconds.
pub const MAX_SECONDS_SCALED: u16 = 30000;

/// Decimal places kept on decoded coordinates.
pub const DECIMAL_PLACES: i32 = 8;

/// Largest story value, stories occupy two bits.
pub const MAX_STORY: u8 = 3;

/// Mask of the story bit in major and minor.
pub const STORY_BIT_MASK: u16 = 0x1;

/// Largest absolute latitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest absolute longitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;
