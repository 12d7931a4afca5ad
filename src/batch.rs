//! Line-oriented batch encoding.
//!
//! Reads one name per line and writes each name with its code, either as
//! tab separated text or as JSON Lines.

use serde::Serialize;
use soundex_core::{Encoder, SoundexCode};
use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::config::{Config, OutputFormat};
use crate::error::AppResult;

/// Per-batch options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub format: OutputFormat,
    pub trim: bool,
    pub skip_blank: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for BatchOptions {
    fn from(config: &Config) -> Self {
        Self {
            format: config.format,
            trim: config.trim,
            skip_blank: config.skip_blank,
        }
    }
}

/// One encoded name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry<'a> {
    pub name: &'a str,
    pub code: SoundexCode,
}

/// Counters for a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub lines: usize,
    pub encoded: usize,
    pub skipped: usize,
    pub defaults: usize,
}

/// Write a single entry in the given format
pub fn write_entry<W: Write>(
    writer: &mut W,
    entry: &Entry<'_>,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}\t{}", entry.name, entry.code)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, entry)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Encode every name produced by `names`
pub fn encode_names<'a, I, W>(
    encoder: &Encoder,
    names: I,
    writer: &mut W,
    format: OutputFormat,
) -> AppResult<BatchSummary>
where
    I: IntoIterator<Item = &'a str>,
    W: Write,
{
    let mut summary = BatchSummary::default();
    for name in names {
        summary.lines += 1;
        record(encoder, name, writer, format, &mut summary)?;
    }
    finish(writer, summary)
}

/// Encode one name per line from `reader`
///
/// Lines that are not valid UTF-8 are decoded lossily and still encoded.
pub fn encode_lines<R, W>(
    encoder: &Encoder,
    mut reader: R,
    writer: &mut W,
    options: BatchOptions,
) -> AppResult<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines += 1;

        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!("Line {} is not valid UTF-8, decoded lossily", summary.lines);
        }

        let name = if options.trim { line.trim() } else { &*line };
        if options.skip_blank && name.trim().is_empty() {
            summary.skipped += 1;
            tracing::trace!("Skipping blank line {}", summary.lines);
            continue;
        }

        record(encoder, name, writer, options.format, &mut summary)?;
    }

    finish(writer, summary)
}

// Same terminators `BufRead::lines` strips.
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    match buf.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => buf,
    }
}

fn finish<W: Write>(writer: &mut W, summary: BatchSummary) -> AppResult<BatchSummary> {
    writer.flush()?;
    tracing::debug!(
        "Batch done: {} lines, {} encoded, {} skipped, {} default codes",
        summary.lines,
        summary.encoded,
        summary.skipped,
        summary.defaults
    );
    Ok(summary)
}

fn record<W: Write>(
    encoder: &Encoder,
    name: &str,
    writer: &mut W,
    format: OutputFormat,
    summary: &mut BatchSummary,
) -> AppResult<()> {
    let code = encoder.encode(Some(name));
    tracing::trace!("{:?} -> {}", name, code);

    if code.is_default() {
        summary.defaults += 1;
    }
    summary.encoded += 1;

    write_entry(writer, &Entry { name, code }, format)
}
