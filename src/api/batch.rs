use crate::api::beacon::{BeaconIdentity, decode, encode};
use crate::api::position::Position;
use crate::util::error::BeaconLocateError;
use rayon::prelude::*;

/// Trait for encoding collections of [`Position`]s in parallel.
///
/// Implemented for `[Position]` (and so `Vec<Position>`).
pub trait PositionsToBeacons {
    /// Encodes every position, failing on the first invalid one.
    fn to_beacons(&self) -> Result<Vec<BeaconIdentity>, BeaconLocateError>;
}

/// Trait for decoding collections of [`BeaconIdentity`]s in parallel.
///
/// Implemented for `[BeaconIdentity]` (and so `Vec<BeaconIdentity>`).
pub trait BeaconsToPositions {
    /// Decodes every identity, failing on the first malformed one.
    fn to_positions(&self) -> Result<Vec<Position>, BeaconLocateError>;
}

impl PositionsToBeacons for [Position] {
    fn to_beacons(&self) -> Result<Vec<BeaconIdentity>, BeaconLocateError> {
        self.par_iter().map(encode).collect()
    }
}

impl BeaconsToPositions for [BeaconIdentity] {
    fn to_positions(&self) -> Result<Vec<Position>, BeaconLocateError> {
        self.par_iter().map(decode).collect()
    }
}
