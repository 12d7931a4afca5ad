//! Soundex - batch encoding and command line access to the American Soundex
//! encoder in `soundex-core`.

pub mod batch;
pub mod config;
pub mod error;

pub use batch::{encode_lines, encode_names, BatchOptions, BatchSummary, Entry};
pub use config::{Config, OutputFormat};
pub use error::{AppError, AppResult};

pub use soundex_core::{
    code_difference, difference, encode, sounds_like, Encoder, SeedPolicy, SoundexCode,
    SoundexError,
};
