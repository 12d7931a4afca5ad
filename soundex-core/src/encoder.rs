//! American Soundex encoder.
//!
//! The encoder scans the name once, left to right. The seed character is kept
//! (uppercased) and each following character is looked up in the phonetic
//! table. A digit is appended when it is not silent and differs from the last
//! appended digit, where the seed's own digit counts as appended. Scanning
//! stops after three digits and the remainder is padded with `'0'`.
//!
//! Non-alphabetic characters inside the name are silent and skipped; they do
//! not end the scan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::code::{SoundexCode, DIGIT_SLOTS};
use crate::error::{SoundexError, SoundexResult};
use crate::table::{phonetic_digit, SILENT};

/// How the first character of a name is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPolicy {
    /// Uppercase whatever the first character is, letter or not.
    Literal,
    /// Names that do not start with an ASCII letter get the default code.
    RequireAlphabetic,
}

/// Seed policy used by [`encode`] and [`Encoder::default`].
pub const DEFAULT_SEED_POLICY: SeedPolicy = SeedPolicy::Literal;

impl SeedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedPolicy::Literal => "literal",
            SeedPolicy::RequireAlphabetic => "require-alphabetic",
        }
    }
}

impl Default for SeedPolicy {
    fn default() -> Self {
        DEFAULT_SEED_POLICY
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedPolicy {
    type Err = SoundexError;

    fn from_str(s: &str) -> SoundexResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(SeedPolicy::Literal),
            "require-alphabetic" | "require_alphabetic" | "alphabetic" => {
                Ok(SeedPolicy::RequireAlphabetic)
            }
            _ => Err(SoundexError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Soundex encoder configured with a [`SeedPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    policy: SeedPolicy,
}

impl Encoder {
    pub const fn new(policy: SeedPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SeedPolicy {
        self.policy
    }

    /// Encode `name`. Absent or empty names give [`SoundexCode::DEFAULT`].
    pub fn encode(&self, name: Option<&str>) -> SoundexCode {
        let Some(name) = name else {
            return SoundexCode::DEFAULT;
        };

        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return SoundexCode::DEFAULT;
        };
        let Some(seed) = self.seed(first) else {
            return SoundexCode::DEFAULT;
        };

        let mut digits = [b'0'; DIGIT_SLOTS];
        let mut filled = 0;
        let mut last = phonetic_digit(first);

        for c in chars {
            if filled == DIGIT_SLOTS {
                break;
            }
            let digit = phonetic_digit(c);
            if digit != SILENT && digit != last {
                digits[filled] = digit;
                filled += 1;
                last = digit;
            }
        }

        SoundexCode::new(seed, digits)
    }

    /// Encode `name` into `out`. Does nothing when `out` is `None`.
    pub fn encode_into(&self, name: Option<&str>, out: Option<&mut SoundexCode>) {
        if let Some(out) = out {
            *out = self.encode(name);
        }
    }

    fn seed(&self, first: char) -> Option<char> {
        if self.policy == SeedPolicy::RequireAlphabetic && !first.is_ascii_alphabetic() {
            return None;
        }
        Some(uppercase(first))
    }
}

/// Encode `name` with [`DEFAULT_SEED_POLICY`].
pub fn encode(name: Option<&str>) -> SoundexCode {
    Encoder::new(DEFAULT_SEED_POLICY).encode(name)
}

// Single-char uppercase mapping; expansions like 'ß' -> "SS" keep the original.
fn uppercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(name: &str) -> String {
        encode(Some(name)).to_string()
    }

    #[test]
    fn test_standard_name() {
        assert_eq!(code("Vijendran"), "V253");
    }

    #[test]
    fn test_mixed_case_name() {
        assert_eq!(code("vIjeNDran"), "V253");
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(encode(None), SoundexCode::DEFAULT);
        assert_eq!(code(""), "0000");
    }

    #[test]
    fn test_single_character() {
        assert_eq!(code("A"), "A000");
        assert_eq!(code("a"), "A000");
    }

    #[test]
    fn test_single_non_alphabetic_literal() {
        assert_eq!(code("1"), "1000");
    }

    #[test]
    fn test_repeated_consonants() {
        assert_eq!(code("AABB"), "A100");
        assert_eq!(code("AABBB"), "A100");
    }

    #[test]
    fn test_repeat_of_seed_sound_is_suppressed() {
        assert_eq!(code("BBBBBBBB"), "B000");
        assert_eq!(code("Pfister"), "P236");
    }

    #[test]
    fn test_non_alphabetic_characters_are_skipped() {
        assert_eq!(code("A1B2C"), "A120");
        assert_eq!(code("A-B_C"), "A120");
        assert_eq!(code("O'Brien"), "O165");
    }

    #[test]
    fn test_short_and_long_names() {
        assert_eq!(code("Jo"), "J000");
        assert_eq!(code("Alexander"), "A425");
        assert_eq!(code(&"A".repeat(50)), "A000");
    }

    #[test]
    fn test_well_known_names() {
        assert_eq!(code("Robert"), "R163");
        assert_eq!(code("Rupert"), "R163");
        assert_eq!(code("Smith"), "S530");
        assert_eq!(code("Smyth"), "S530");
        assert_eq!(code("Lee"), "L000");
    }

    #[test]
    fn test_scan_stops_after_three_digits() {
        assert_eq!(code("Bcdlmr"), "B234");
    }

    #[test]
    fn test_require_alphabetic_policy() {
        let encoder = Encoder::new(SeedPolicy::RequireAlphabetic);
        assert_eq!(encoder.encode(Some("1")), SoundexCode::DEFAULT);
        assert_eq!(encoder.encode(Some("-Smith")), SoundexCode::DEFAULT);
        assert_eq!(encoder.encode(Some("Smith")), "S530");
        assert_eq!(encoder.encode(None), SoundexCode::DEFAULT);
    }

    #[test]
    fn test_non_ascii_seed() {
        assert_eq!(code("émile"), "É540");
        assert_eq!(code("ßmith"), "ß530");
        let encoder = Encoder::new(SeedPolicy::RequireAlphabetic);
        assert!(encoder.encode(Some("émile")).is_default());
    }

    #[test]
    fn test_encode_into() {
        let encoder = Encoder::default();
        let mut out = SoundexCode::DEFAULT;

        encoder.encode_into(Some("Robert"), Some(&mut out));
        assert_eq!(out, "R163");

        encoder.encode_into(None, Some(&mut out));
        assert!(out.is_default());

        encoder.encode_into(Some("Alexander"), None);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(encode(Some("Tymczak")), encode(Some("Tymczak")));
    }

    #[test]
    fn test_policy_parse_and_display() {
        assert_eq!("literal".parse::<SeedPolicy>().unwrap(), SeedPolicy::Literal);
        assert_eq!(
            "Require-Alphabetic".parse::<SeedPolicy>().unwrap(),
            SeedPolicy::RequireAlphabetic
        );
        assert_eq!(
            "alphabetic".parse::<SeedPolicy>().unwrap(),
            SeedPolicy::RequireAlphabetic
        );
        assert!(matches!(
            "strict".parse::<SeedPolicy>(),
            Err(SoundexError::InvalidPolicy(_))
        ));
        assert_eq!(SeedPolicy::RequireAlphabetic.to_string(), "require-alphabetic");
        assert_eq!(SeedPolicy::default(), DEFAULT_SEED_POLICY);
    }
}
