//! The line-oriented bus alias scanner.
//!
//! One forward pass, no backtracking. Two pieces of state survive across
//! lines: whether the scan is inside a `(bus_alias` block, and whether it
//! is inside that block's `(members` sub-block, each with a running
//! parenthesis depth counter updated by the whole line's `(`/`)` delta.
//! The per-line (not per-token-pair) counting discipline is load-bearing:
//! it decides exactly when multi-line nested content closes a block.

use std::{fs, path::Path};

use log::{debug, info};

use busfold_core::bus::{BusDefinition, BusTable};

use crate::error::ParseError;

/// Token opening a bus alias block. Matched at line start after trimming.
const ALIAS_OPEN: &str = "(bus_alias";

/// Token opening the members sub-block. Matched anywhere in the line.
const MEMBERS_OPEN: &str = "(members";

/// Extracts bus alias definitions from schematic source text.
///
/// Returns the table of buses in order of first appearance. A duplicate
/// alias name replaces the earlier member list (last-write-wins).
///
/// # Errors
///
/// Returns [`ParseError::NoBuses`] when the source contains no
/// `bus_alias` blocks. Malformed content is skipped, never an error.
pub fn parse(source: &str) -> Result<BusTable, ParseError> {
    let table = scan_lines(source.lines());
    if table.is_empty() {
        return Err(ParseError::NoBuses);
    }

    info!(buses = table.len(); "Extracted bus aliases");
    Ok(table)
}

/// Reads a schematic file and extracts its bus alias definitions.
///
/// # Errors
///
/// Returns [`ParseError::Io`] when the file cannot be read or is not
/// valid UTF-8, and [`ParseError::NoBuses`] when it contains no
/// `bus_alias` blocks.
pub fn parse_file(path: impl AsRef<Path>) -> Result<BusTable, ParseError> {
    let path = path.as_ref();
    debug!(path = path.display().to_string(); "Reading schematic");

    let source = fs::read_to_string(path)?;
    parse(&source)
}

/// Per-block scan state, reset every time an alias block completes.
struct AliasBlock {
    /// Alias name from the opening line, if one was quoted there.
    name: Option<String>,
    /// Members collected so far, in source order.
    members: Vec<String>,
    /// Running paren depth of the alias block.
    depth: i32,
    /// Running paren depth of the members sub-block, if inside one.
    members_depth: i32,
    in_members: bool,
}

fn scan_lines<'a>(lines: impl Iterator<Item = &'a str>) -> BusTable {
    let mut table = BusTable::new();
    let mut block: Option<AliasBlock> = None;

    for raw in lines {
        let line = raw.trim();

        if line.starts_with(ALIAS_OPEN) {
            // The opening line contributes only the name; quoted strings on
            // it are never collected as members, and the block can only
            // commit on a later line.
            block = Some(AliasBlock {
                name: first_quoted(line).map(str::to_string),
                members: Vec::new(),
                depth: paren_delta(line),
                members_depth: 0,
                in_members: false,
            });
            continue;
        }

        let Some(state) = block.as_mut() else {
            continue;
        };

        state.depth += paren_delta(line);

        if !state.in_members && line.contains(MEMBERS_OPEN) {
            state.in_members = true;
            state.members_depth = paren_delta(line);
            collect_quoted(line, &mut state.members);
            if state.members_depth <= 0 {
                // The sub-block opened and closed on the same line.
                state.in_members = false;
            }
        } else if state.in_members {
            collect_quoted(line, &mut state.members);
            state.members_depth += paren_delta(line);
            if state.members_depth <= 0 {
                state.in_members = false;
            }
        }

        if state.depth <= 0 {
            if let Some(finished) = block.take() {
                if let Some(name) = finished.name {
                    debug!(bus = name.as_str(), members = finished.members.len(); "Committed bus alias");
                    table.insert(BusDefinition::new(name, finished.members));
                }
            }
        }
    }

    table
}

/// Net change in parenthesis depth contributed by one line.
fn paren_delta(line: &str) -> i32 {
    let opens = line.bytes().filter(|&b| b == b'(').count() as i32;
    let closes = line.bytes().filter(|&b| b == b')').count() as i32;
    opens - closes
}

/// Text following the first `"` on the line, up to the next `"` or the
/// end of the line. Mirrors the original split-on-quote behavior: an
/// unclosed quote still yields a name.
fn first_quoted(line: &str) -> Option<&str> {
    line.split('"').nth(1)
}

/// Appends every complete `"..."` substring on the line.
///
/// A literal between-quotes scan: embedded escaped quotes are not
/// interpreted, and a trailing unpaired quote contributes nothing.
fn collect_quoted(line: &str, out: &mut Vec<String>) {
    let parts: Vec<&str> = line.split('"').collect();
    for (i, part) in parts.iter().enumerate() {
        // Odd-indexed parts sit between a quote pair, provided the
        // closing quote exists.
        if i % 2 == 1 && i + 1 < parts.len() {
            out.push((*part).to_string());
        }
    }
}
