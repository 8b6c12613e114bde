pub mod batch;
pub mod beacon;
pub mod position;

pub use batch::{BeaconsToPositions, PositionsToBeacons};
pub use beacon::{BeaconIdentity, decode, encode};
pub use position::{GeolocationPosition, Position};
