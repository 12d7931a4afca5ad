//! Soundex Core - American Soundex phonetic encoding.
//!
//! Maps a name to a fixed four character code: the uppercased first character
//! followed by three digits describing the consonant sounds that follow.
//! Similar sounding names share a code, so the code can be used to match
//! names across spelling variations.
//!
//! # Main Components
//!
//! - **Table**: the static letter to digit mapping
//! - **SoundexCode**: the fixed-width result type
//! - **Encoder**: the encoding routine, configured with a [`SeedPolicy`]
//! - **Functions**: name-dispatched calls over JSON values
//!
//! # Example
//!
//! ```rust
//! use soundex_core::{encode, sounds_like, SoundexCode};
//!
//! assert_eq!(encode(Some("Robert")).to_string(), "R163");
//! assert_eq!(encode(None), SoundexCode::DEFAULT);
//! assert!(sounds_like(Some("Smith"), Some("Smyth")));
//! ```

pub mod code;
pub mod compare;
pub mod encoder;
pub mod error;
pub mod functions;
pub mod table;

// Re-export main types for convenience
pub use code::{SoundexCode, CODE_LEN};
pub use compare::{code_difference, difference, sounds_like};
pub use encoder::{encode, Encoder, SeedPolicy, DEFAULT_SEED_POLICY};
pub use error::{SoundexError, SoundexResult};
pub use table::phonetic_digit;
