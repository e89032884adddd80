//! Emitted schematic element records.
//!
//! This module defines the write-once records produced by layout and
//! consumed by the serializer. Each record carries its position and a
//! freshly generated unique identifier; none of them are retained after
//! serialization.
//!
//! # Overview
//!
//! - [`HierarchicalLabel`] - Named connection point for the whole bus
//! - [`BusSegment`] - A straight bus line (the stub and the vertical run)
//! - [`BusEntry`] - The connector glyph where a wire branches off the bus
//! - [`Wire`] - One horizontal signal wire
//! - [`SignalLabel`] - The net label at the far end of a wire
//! - [`SchematicElement`] - The union the serializer walks in one pass
//!
//! Fixed visual conventions shared by all generated fragments live here as
//! constants: the stub length, the bus entry size, the label rotation, and
//! the label font size.

use crate::geometry::{Point, Size};

/// Distance from a label anchor to the bus line, and the side length of a
/// bus entry, in millimetres. One Eeschema grid step.
pub const STUB_LENGTH: f64 = 2.54;

/// Rotation applied to generated labels so the text reads toward the stem.
pub const LABEL_ANGLE: f64 = 180.0;

/// Font size of generated label text, in millimetres.
pub const FONT_SIZE: f64 = 1.27;

/// A hierarchical label marking the bus's connection point to the parent
/// sheet. The text is the brace-wrapped bus name, e.g. `{DATA}`.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchicalLabel {
    /// Label text, including the surrounding braces.
    pub text: String,
    /// Anchor position.
    pub at: Point,
    /// Rotation in degrees.
    pub angle: f64,
    /// Unique identifier.
    pub id: String,
}

/// A straight bus line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct BusSegment {
    pub from: Point,
    pub to: Point,
    pub id: String,
}

/// A bus entry glyph marking where one wire branches off the bus.
#[derive(Debug, Clone, PartialEq)]
pub struct BusEntry {
    /// Top-left anchor of the entry.
    pub at: Point,
    /// Glyph size, fixed at [`STUB_LENGTH`] square.
    pub size: Size,
    pub id: String,
}

/// One horizontal signal wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    pub from: Point,
    pub to: Point,
    pub id: String,
}

/// The net label naming the signal at a wire's far end.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalLabel {
    /// Label text, the bare signal name.
    pub text: String,
    pub at: Point,
    /// Rotation in degrees.
    pub angle: f64,
    pub id: String,
}

/// Any element the generator can emit, in the order layout produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum SchematicElement {
    HierarchicalLabel(HierarchicalLabel),
    BusSegment(BusSegment),
    BusEntry(BusEntry),
    Wire(Wire),
    SignalLabel(SignalLabel),
}

impl SchematicElement {
    /// Returns the element's unique identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::HierarchicalLabel(e) => &e.id,
            Self::BusSegment(e) => &e.id,
            Self::BusEntry(e) => &e.id,
            Self::Wire(e) => &e.id,
            Self::SignalLabel(e) => &e.id,
        }
    }
}
