//! Error types for busfold operations.
//!
//! This module provides the main error type [`BusfoldError`] plus the
//! [`ValidationError`] detail type for caller-correctable input problems.

use std::io;

use thiserror::Error;

use busfold_parser::ParseError;

/// The main error type for busfold operations.
///
/// Parse failures keep their own taxonomy (I/O vs. empty result) from the
/// parser crate; validation failures carry enough context to name the
/// offending bus or configuration field. Nothing is retried internally
/// and generation never emits partial output.
#[derive(Debug, Error)]
pub enum BusfoldError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid generation request: {0}")]
    Validation(#[from] ValidationError),
}

/// Caller-correctable problems with a generation request.
///
/// All variants are detected before any output is produced.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The selection names no buses at all.
    #[error("selection is empty; choose at least one bus")]
    EmptySelection,

    /// A selected bus does not exist in the parsed table.
    #[error("unknown bus `{0}`")]
    UnknownBus(String),

    /// A selected signal is not a member of its bus.
    #[error("signal `{signal}` is not a member of bus `{bus}`")]
    UnknownMember { bus: String, signal: String },

    /// A selected bus has no signals left after filtering.
    #[error("bus `{0}` has no members selected")]
    NoMembers(String),

    /// A configuration field is not a usable number.
    #[error("configuration field `{field}` must be a positive finite number, got {value}")]
    InvalidNumber { field: &'static str, value: f64 },
}
