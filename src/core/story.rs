use crate::core::constants::{MAX_STORY, STORY_BIT_MASK};
use serde::{Deserialize, Deserializer, Serialize};

/// Two-bit floor indicator carried in the least significant bits of major and minor.
///
/// The high bit goes into major, the low bit into minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Story(u8);

impl Story {
    pub const GROUND: Story = Story(0);

    /// Clamps any integer into `0..=3`. Never fails.
    pub fn clamp(value: i64) -> Self {
        Story(value.clamp(0, MAX_STORY as i64) as u8)
    }

    /// Clamps a real number into `0..=3`, dropping any fraction. NaN maps to 0.
    pub fn clamp_f64(value: f64) -> Self {
        if value.is_nan() {
            return Story::GROUND;
        }
        Story(value.clamp(0.0, MAX_STORY as f64).floor() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Bit stored in the LSB of major.
    pub fn high_bit(self) -> u16 {
        (self.0 as u16 >> 1) & STORY_BIT_MASK
    }

    /// Bit stored in the LSB of minor.
    pub fn low_bit(self) -> u16 {
        self.0 as u16 & STORY_BIT_MASK
    }

    /// Recovers the story from the LSBs of major and minor.
    pub fn from_bits(major: u16, minor: u16) -> Self {
        let high = (major & STORY_BIT_MASK) as u8;
        let low = (minor & STORY_BIT_MASK) as u8;
        Story((high << 1) | low)
    }
}

impl From<u8> for Story {
    fn from(value: u8) -> Self {
        Story::clamp(value as i64)
    }
}

impl From<Story> for u8 {
    fn from(story: Story) -> Self {
        story.0
    }
}

/// Accepts any JSON number: integers, floats like `2.0`, out-of-range values.
impl<'de> Deserialize<'de> for Story {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Ok(Story::clamp_f64(raw))
    }
}

impl std::fmt::Display for Story {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
