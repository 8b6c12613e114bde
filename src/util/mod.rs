pub mod coord;
pub mod error;
pub mod identifier;

pub use coord::Coordinate;
pub use error::BeaconLocateError;
pub use identifier::{IdentifierFields, generate_identifier, parse_identifier};
