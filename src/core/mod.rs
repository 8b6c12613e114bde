pub mod constants;
pub mod dms;
pub mod quadrant;
pub mod story;

pub use constants::{
    DECIMAL_PLACES, HYPHEN_POSITIONS, IDENTIFIER_LENGTH, IDENTIFIER_PREFIX, MAX_STORY, MINUTE_BOX,
    SECONDS_RESOLUTION,
};
pub use dms::{Dms, round_to_decimals};
pub use quadrant::Quadrant;
pub use story::Story;
