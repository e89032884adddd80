//! Bus alias extraction for busfold.
//!
//! This crate pulls `(bus_alias "NAME" (members ...))` definitions out of
//! KiCad schematic text. It is deliberately not a full s-expression
//! parser: the schematic format nests arbitrarily many parenthesized
//! groups, but every token this tool cares about appears on its own line,
//! so a single forward pass with per-line parenthesis depth counting
//! recovers the alias data without a grammar. Everything outside alias
//! blocks is ignored, and malformed content never fails the parse.
//!
//! The public entry points are [`parse`] for in-memory text and
//! [`parse_file`] for reading a `.kicad_sch` from disk.

pub mod error;

mod parser;


pub use error::ParseError;
pub use parser::{parse, parse_file};
