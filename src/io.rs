// File-level input helpers.
//
// Provides `load()` and the per-mode readers that turn a file on disk into an
// `engine::Input`. Optionally computes a SHA-256 fingerprint of the raw file
// (feature-gated behind `file-io`).
//
// Callers decide how to degrade on failure: the CLI reports the error and
// carries on with an empty input.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use log::warn;
#[cfg(feature = "file-io")]
use sha2::Digest;
use thiserror::Error;

use crate::engine::Input;
use crate::transform::Projection;

// ---------------------------------------------------------------------------
// Source kind
// ---------------------------------------------------------------------------

/// What a file on disk contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Free-form text, projected as given.
    Text(Projection),
    /// Whitespace-separated integers.
    Log,
}

impl SourceKind {
    /// The same kind with nothing loaded.
    pub fn empty_input(self) -> Input {
        match self {
            Self::Text(Projection::Bytes) => Input::Text(Vec::new()),
            Self::Text(Projection::CodePoints) => Input::Utf8(String::new()),
            Self::Log => Input::Log(Vec::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics about a loaded input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStats {
    /// File size in bytes.
    pub byte_size: u64,
    /// SHA-256 of the file (if `file-io` feature is enabled).
    pub sha256: Option<[u8; 32]>,
    /// Unread part of the log token that ended reading early.
    pub terminator: Option<String>,
}

/// A file turned into pipeline input.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub input: Input,
    pub stats: InputStats,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for input loading.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: not valid UTF-8 (byte {valid_up_to})", path.display())]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },
}

// ---------------------------------------------------------------------------
// Default buffer size
// ---------------------------------------------------------------------------

const BUF_SIZE: usize = 64 * 1024; // 64 KiB

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Load `path` as the given kind of source.
pub fn load(path: &Path, kind: SourceKind) -> Result<Loaded, InputError> {
    match kind {
        SourceKind::Text(Projection::Bytes) => read_text_file(path),
        SourceKind::Text(Projection::CodePoints) => read_utf8_file(path),
        SourceKind::Log => read_log_file(path),
    }
}

/// Read a text file byte-exact, embedded newlines included.
pub fn read_text_file(path: &Path) -> Result<Loaded, InputError> {
    let data = read_all(path)?;
    let stats = stats_for(&data, None);
    Ok(Loaded {
        input: Input::Text(data),
        stats,
    })
}

/// Read a text file that must be valid UTF-8.
pub fn read_utf8_file(path: &Path) -> Result<Loaded, InputError> {
    let data = read_all(path)?;
    let stats = stats_for(&data, None);
    let text = String::from_utf8(data).map_err(|e| InputError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;
    Ok(Loaded {
        input: Input::Utf8(text),
        stats,
    })
}

/// Read whitespace-separated integers, stopping at the first bad token.
pub fn read_log_file(path: &Path) -> Result<Loaded, InputError> {
    let data = read_all(path)?;
    let parsed = parse_log(&String::from_utf8_lossy(&data));
    if let Some(token) = &parsed.terminator {
        warn!(
            "{}: stopped at {token:?} after {} values",
            path.display(),
            parsed.values.len()
        );
    }
    let stats = stats_for(&data, parsed.terminator);
    Ok(Loaded {
        input: Input::Log(parsed.values),
        stats,
    })
}

fn read_all(path: &Path) -> Result<Vec<u8>, InputError> {
    let wrap = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(wrap)?;
    let mut reader = BufReader::with_capacity(BUF_SIZE, file);
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(wrap)?;
    Ok(data)
}

fn stats_for(data: &[u8], terminator: Option<String>) -> InputStats {
    InputStats {
        byte_size: data.len() as u64,
        sha256: fingerprint(data),
        terminator,
    }
}

// ---------------------------------------------------------------------------
// Log parsing
// ---------------------------------------------------------------------------

/// Integers parsed from a log, plus the token that ended parsing early.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLog {
    pub values: Vec<i64>,
    pub terminator: Option<String>,
}

/// Parse whitespace-separated integers, stream-extraction style: a token
/// that is not a whole `i64` still yields its leading `[+-]?digits` when
/// those fit in an `i64`, and then parsing stops. The unread remainder of
/// that token is kept as the terminator.
pub fn parse_log(text: &str) -> ParsedLog {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        if let Ok(v) = token.parse::<i64>() {
            values.push(v);
            continue;
        }

        let (prefix, rest) = split_numeric_prefix(token);
        let terminator = match prefix.parse::<i64>() {
            Ok(v) => {
                values.push(v);
                rest
            }
            // No digits, or the digits overflow: nothing from this token.
            Err(_) => token,
        };
        return ParsedLog {
            values,
            terminator: Some(terminator.to_string()),
        };
    }
    ParsedLog {
        values,
        terminator: None,
    }
}

/// Split `token` after its longest `[+-]?digits` prefix.
fn split_numeric_prefix(token: &str) -> (&str, &str) {
    let bytes = token.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return ("", token);
    }
    token.split_at(sign + digits)
}

// ---------------------------------------------------------------------------
// Fingerprints
// ---------------------------------------------------------------------------

#[cfg(feature = "file-io")]
fn fingerprint(data: &[u8]) -> Option<[u8; 32]> {
    Some(sha2::Sha256::digest(data).into())
}

#[cfg(not(feature = "file-io"))]
fn fingerprint(_data: &[u8]) -> Option<[u8; 32]> {
    None
}

/// Lowercase hex rendering of a digest.
pub fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
