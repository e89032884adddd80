//! S-expression serialization of generated elements.
//!
//! The final stage of generation: one pass over the element records from
//! [`layout`](crate::layout), appending one top-level KiCad form per
//! element. The output is a fragment, not a whole document — the caller
//! pastes it into an existing schematic, so every form is emitted exactly
//! the way Eeschema writes it: tab-indented, newline-terminated, with
//! `pts`/`at`/`size`/`stroke`/`effects`/`uuid` sub-forms.
//!
//! Coordinates are rounded to 0.01 mm before printing and rendered with
//! the shortest representation (`52.07`, `2.54`, `180`), matching the
//! sheet grid resolution.

use std::fmt::Write;

use busfold_core::{
    element::{BusEntry, BusSegment, FONT_SIZE, HierarchicalLabel, SchematicElement, SignalLabel, Wire},
    geometry::Point,
};

/// Serializes the element list into one pasteable text blob.
pub(crate) fn serialize(elements: &[SchematicElement]) -> String {
    let mut out = String::new();

    for element in elements {
        match element {
            SchematicElement::HierarchicalLabel(e) => hierarchical_label(&mut out, e),
            SchematicElement::BusSegment(e) => bus_segment(&mut out, e),
            SchematicElement::BusEntry(e) => bus_entry(&mut out, e),
            SchematicElement::Wire(e) => wire(&mut out, e),
            SchematicElement::SignalLabel(e) => signal_label(&mut out, e),
        }
    }

    out
}

/// A coordinate rounded to the 0.01 mm file resolution, shortest form.
fn coord(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn xy(point: Point) -> String {
    format!("(xy {} {})", coord(point.x()), coord(point.y()))
}

fn hierarchical_label(out: &mut String, e: &HierarchicalLabel) {
    let _ = writeln!(out, "(hierarchical_label \"{}\"", e.text);
    let _ = writeln!(out, "\t(shape input)");
    let _ = writeln!(
        out,
        "\t(at {} {} {})",
        coord(e.at.x()),
        coord(e.at.y()),
        coord(e.angle)
    );
    effects(out, "right");
    uuid(out, &e.id);
    let _ = writeln!(out, ")");
}

fn bus_segment(out: &mut String, e: &BusSegment) {
    let _ = writeln!(out, "(bus");
    pts(out, e.from, e.to);
    stroke(out);
    uuid(out, &e.id);
    let _ = writeln!(out, ")");
}

fn bus_entry(out: &mut String, e: &BusEntry) {
    let _ = writeln!(out, "(bus_entry");
    let _ = writeln!(out, "\t(at {} {})", coord(e.at.x()), coord(e.at.y()));
    let _ = writeln!(
        out,
        "\t(size {} {})",
        coord(e.size.width()),
        coord(e.size.height())
    );
    stroke(out);
    uuid(out, &e.id);
    let _ = writeln!(out, ")");
}

fn wire(out: &mut String, e: &Wire) {
    let _ = writeln!(out, "(wire");
    pts(out, e.from, e.to);
    stroke(out);
    uuid(out, &e.id);
    let _ = writeln!(out, ")");
}

fn signal_label(out: &mut String, e: &SignalLabel) {
    let _ = writeln!(out, "(label \"{}\"", e.text);
    let _ = writeln!(
        out,
        "\t(at {} {} {})",
        coord(e.at.x()),
        coord(e.at.y()),
        coord(e.angle)
    );
    effects(out, "right bottom");
    uuid(out, &e.id);
    let _ = writeln!(out, ")");
}

fn pts(out: &mut String, from: Point, to: Point) {
    let _ = writeln!(out, "\t(pts");
    let _ = writeln!(out, "\t\t{} {}", xy(from), xy(to));
    let _ = writeln!(out, "\t)");
}

fn stroke(out: &mut String) {
    let _ = writeln!(out, "\t(stroke (width 0) (type default))");
}

fn effects(out: &mut String, justify: &str) {
    let _ = writeln!(out, "\t(effects");
    let _ = writeln!(out, "\t\t(font (size {FONT_SIZE} {FONT_SIZE}))");
    let _ = writeln!(out, "\t\t(justify {justify})");
    let _ = writeln!(out, "\t)");
}

fn uuid(out: &mut String, id: &str) {
    let _ = writeln!(out, "\t(uuid \"{id}\")");
}
