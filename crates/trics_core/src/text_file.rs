//! Line-oriented text file reading with a configurable encoding.
//!
//! # Invariants
//! - UTF-16 input honours a byte-order mark and is big-endian without one.
//! - A leading byte-order mark never reaches the returned lines.
//! - `\n`, `\r\n` and a lone `\r` all end a line.

use crate::settings::TextEncoding;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

const BOM: char = '\u{feff}';

/// Outcome of a successful line-oriented load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines that matched the grammar.
    pub entries: usize,
    /// Lines skipped as malformed.
    pub skipped: usize,
}

/// Whole-file load failure. Previously loaded state is left untouched.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Encoding { path: PathBuf, details: String },
    /// No line matched the grammar.
    NoEntries { path: Option<PathBuf> },
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_failed",
            Self::Encoding { .. } => "decode_failed",
            Self::NoEntries { .. } => "no_entries",
        }
    }

    pub(crate) fn from_read(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::InvalidData {
            Self::Encoding {
                path: path.to_path_buf(),
                details: err.to_string(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read `{}`: {source}", path.display()),
            Self::Encoding { path, details } => {
                write!(f, "failed to decode `{}`: {details}", path.display())
            }
            Self::NoEntries { path: Some(path) } => {
                write!(f, "no usable entries found in `{}`", path.display())
            }
            Self::NoEntries { path: None } => write!(f, "no usable entries found"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encoding { .. } | Self::NoEntries { .. } => None,
        }
    }
}

/// Reads `path` and splits it into lines without terminators.
///
/// # Errors
/// - The underlying `io::Error` when the file cannot be read.
/// - `io::ErrorKind::InvalidData` when the bytes do not decode.
pub fn read_lines(path: &Path, encoding: TextEncoding) -> io::Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    let text = decode(&bytes, encoding)?;
    Ok(split_lines(&text).map(str::to_string).collect())
}

/// Splits text into lines on `\n`, `\r\n` or `\r`.
///
/// A trailing terminator does not produce an empty final line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(|c: char| c == '\r' || c == '\n') else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Decodes raw bytes into text.
///
/// # Errors
/// - `io::ErrorKind::InvalidData` on malformed input.
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> io::Result<String> {
    let text = match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?,
        TextEncoding::Utf16 => decode_utf16(bytes)?,
    };
    Ok(match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

fn decode_utf16(bytes: &[u8]) -> io::Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "utf-16 input has an odd number of bytes",
        ));
    }

    let little_endian = bytes.starts_with(&[0xff, 0xfe]);
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Encodes text as big-endian UTF-16 with a byte-order mark.
pub fn encode_utf16(text: &str) -> Vec<u8> {
    std::iter::once(BOM as u16)
        .chain(text.encode_utf16())
        .flat_map(u16::to_be_bytes)
        .collect()
}
