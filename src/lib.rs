//! # beacon-locate
//!
//! Turns a latitude/longitude (plus a 0-3 story) into the UUID, major and minor
//! an iBeacon broadcasts, and back. A receiver that sees only the beacon
//! advertisement can recover the position to within 0.01 arc-seconds.
//!
//! ### 1. `encode` / `decode` - Single Positions
//!
//! ```
//! use beacon_locate::{decode, encode, Position};
//!
//! # fn main() -> Result<(), beacon_locate::BeaconLocateError> {
//! let beacon = encode(&Position::new(51.123456, -120.987654).with_story(2))?;
//! println!("{} {} {}", beacon.identifier, beacon.major, beacon.minor);
//!
//! let position = decode(&beacon)?;
//! assert_eq!(position.story.value(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Batches
//!
//! ```
//! use beacon_locate::{BeaconsToPositions, Position, PositionsToBeacons};
//!
//! # fn main() -> Result<(), beacon_locate::BeaconLocateError> {
//! let positions = vec![Position::new(48.8584, 2.2945), Position::new(-22.9519, -43.2105)];
//! let beacons = positions.to_beacons()?;
//! let back = beacons.to_positions()?;
//! assert_eq!(back.len(), 2);
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    BeaconIdentity, BeaconsToPositions, GeolocationPosition, Position, PositionsToBeacons, decode,
    encode,
};
pub use core::{
    DECIMAL_PLACES, Dms, HYPHEN_POSITIONS, IDENTIFIER_LENGTH, IDENTIFIER_PREFIX, MAX_STORY,
    MINUTE_BOX, Quadrant, SECONDS_RESOLUTION, Story, round_to_decimals,
};
pub use util::{
    BeaconLocateError, Coordinate, IdentifierFields, generate_identifier, parse_identifier,
};

pub use geo_types;
