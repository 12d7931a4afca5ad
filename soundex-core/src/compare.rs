//! Comparing names by their Soundex codes.

use crate::code::SoundexCode;
use crate::encoder::Encoder;

impl Encoder {
    /// True when both names encode to the same, non-default code.
    pub fn sounds_like(&self, a: Option<&str>, b: Option<&str>) -> bool {
        let a = self.encode(a);
        !a.is_default() && a == self.encode(b)
    }

    /// Number of positions (0..=4) at which the two names' codes agree.
    pub fn difference(&self, a: Option<&str>, b: Option<&str>) -> u8 {
        code_difference(&self.encode(a), &self.encode(b))
    }
}

/// Number of positions (0..=4) at which two codes agree.
pub fn code_difference(a: &SoundexCode, b: &SoundexCode) -> u8 {
    a.chars().zip(b.chars()).filter(|(x, y)| x == y).count() as u8
}

/// [`Encoder::sounds_like`] with the default seed policy.
pub fn sounds_like(a: Option<&str>, b: Option<&str>) -> bool {
    Encoder::default().sounds_like(a, b)
}

/// [`Encoder::difference`] with the default seed policy.
pub fn difference(a: Option<&str>, b: Option<&str>) -> u8 {
    Encoder::default().difference(a, b)
}
