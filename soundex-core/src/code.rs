//! Fixed-width Soundex code value.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{SoundexError, SoundexResult};

/// Number of characters in every rendered code.
pub const CODE_LEN: usize = 4;

/// Number of digit slots following the seed.
pub const DIGIT_SLOTS: usize = CODE_LEN - 1;

/// A Soundex code: one seed character followed by three digits.
///
/// Rendering through [`fmt::Display`] always yields exactly four characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoundexCode {
    seed: char,
    digits: [u8; DIGIT_SLOTS],
}

impl SoundexCode {
    /// Code produced for absent, empty or rejected input.
    pub const DEFAULT: SoundexCode = SoundexCode {
        seed: '0',
        digits: [b'0'; DIGIT_SLOTS],
    };

    pub(crate) const fn new(seed: char, digits: [u8; DIGIT_SLOTS]) -> Self {
        Self { seed, digits }
    }

    /// First character of the code.
    pub fn seed(&self) -> char {
        self.seed
    }

    /// The three digit characters as ASCII bytes.
    pub fn digits(&self) -> [u8; DIGIT_SLOTS] {
        self.digits
    }

    /// True for the `"0000"` code.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Iterate over the four characters of the code.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        std::iter::once(self.seed).chain(self.digits.iter().map(|&d| d as char))
    }
}

impl Default for SoundexCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SoundexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl FromStr for SoundexCode {
    type Err = SoundexError;

    fn from_str(s: &str) -> SoundexResult<Self> {
        let mut chars = s.chars();
        // Any char is a valid seed under the literal policy.
        let Some(seed) = chars.next() else {
            return Err(SoundexError::InvalidCode(s.to_string()));
        };

        let mut digits = [b'0'; DIGIT_SLOTS];
        for slot in digits.iter_mut() {
            match chars.next() {
                Some(c @ '0'..='6') => *slot = c as u8,
                _ => return Err(SoundexError::InvalidCode(s.to_string())),
            }
        }

        if chars.next().is_some() {
            return Err(SoundexError::InvalidCode(s.to_string()));
        }

        Ok(Self { seed, digits })
    }
}

impl PartialEq<str> for SoundexCode {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for SoundexCode {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for SoundexCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SoundexCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
