//! Error types for the schematic parse.

use std::io;

use thiserror::Error;

/// Errors surfaced by [`parse`](crate::parse) and
/// [`parse_file`](crate::parse_file).
///
/// Malformed schematic content is never an error; the scan simply skips
/// what it does not recognize. The two failure modes are the file being
/// unreadable and the file containing no bus aliases at all — the latter
/// is a reportable empty result, distinct from a hard I/O failure, so the
/// caller can tell the user "no buses found" rather than "read failed".
#[derive(Debug, Error)]
pub enum ParseError {
    /// The schematic could not be read or was not valid UTF-8.
    #[error("failed to read schematic: {0}")]
    Io(#[from] io::Error),

    /// The schematic was read but contains no `bus_alias` blocks.
    #[error("no bus aliases found in the schematic")]
    NoBuses,
}
