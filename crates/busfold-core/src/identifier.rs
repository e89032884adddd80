//! Injectable unique-identifier sources for emitted elements.
//!
//! Every generated schematic element carries a fresh identifier that is
//! unique within the output document and has no semantic meaning.
//! Generation goes through the [`IdSource`] trait so production code can
//! use random UUIDs while tests supply deterministic values and assert
//! exact output text.

use uuid::Uuid;

/// A source of unique element identifiers.
///
/// Identifiers are never reused and never derived from element content.
pub trait IdSource {
    /// Returns the next fresh identifier.
    fn next_id(&mut self) -> String;
}

/// The production identifier source: random version-4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// A deterministic identifier source for tests and golden output.
///
/// Yields `<prefix>-0`, `<prefix>-1`, ... in order.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    next: u64,
}

impl SequentialIdSource {
    /// Creates a sequential source with the given identifier prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
