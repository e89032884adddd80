//! Geometry computation for bus fan-outs.
//!
//! This is the pure middle stage of generation: it walks a validated
//! selection and produces positioned element records, leaving all text
//! formatting to [`export`](crate::export). Each bus is laid out
//! independently of the others except for its horizontal anchor offset.
//!
//! Per bus at selection index `idx`:
//!
//! ```text
//!            {NAME}──┐ (anchor_x, start_y)
//!                    │
//!                    ├─╲────── D0   y = start_y + spacing
//!                    │
//!                    ├─╲────── D1   y = start_y + spacing * 2
//!                    │
//! ```
//!
//! with `anchor_x = start_x + idx * (connection_length + bus_pitch)`.
//! Emission order per bus is fixed: hierarchical label, stub, vertical
//! run (when there are members), then entry/wire/label triples per
//! member. The serializer preserves this order verbatim.

use log::debug;

use busfold_core::{
    bus::BusSelection,
    element::{
        BusEntry, BusSegment, HierarchicalLabel, LABEL_ANGLE, STUB_LENGTH, SchematicElement,
        SignalLabel, Wire,
    },
    geometry::{Point, Size},
    identifier::IdSource,
};

use crate::config::GenerationConfig;

/// Lays out every selected bus, in selection order.
///
/// The selection must already be validated: every entry carries at least
/// one member. Identifier assignment happens here so the serializer can
/// stay a pure formatting pass.
pub(crate) fn unfold(
    selection: &[BusSelection],
    config: &GenerationConfig,
    ids: &mut dyn IdSource,
) -> Vec<SchematicElement> {
    let mut elements = Vec::new();

    for (idx, entry) in selection.iter().enumerate() {
        let anchor_x = config.start_x() + idx as f64 * config.anchor_step();
        debug!(bus = entry.bus(), anchor_x = anchor_x; "Laying out bus fan-out");
        unfold_bus(entry, anchor_x, config, ids, &mut elements);
    }

    elements
}

/// Lays out one bus: label, stub, vertical run, then one entry/wire/label
/// triple per member.
fn unfold_bus(
    entry: &BusSelection,
    anchor_x: f64,
    config: &GenerationConfig,
    ids: &mut dyn IdSource,
    out: &mut Vec<SchematicElement>,
) {
    let anchor = Point::new(anchor_x, config.start_y());
    let label_anchor = anchor.translate(-STUB_LENGTH, 0.0);
    let member_count = entry.members().len();

    out.push(SchematicElement::HierarchicalLabel(HierarchicalLabel {
        text: format!("{{{}}}", entry.bus()),
        at: label_anchor,
        angle: LABEL_ANGLE,
        id: ids.next_id(),
    }));

    // Short horizontal stub from the label to the stem.
    out.push(SchematicElement::BusSegment(BusSegment {
        from: label_anchor,
        to: anchor,
        id: ids.next_id(),
    }));

    if member_count > 0 {
        let run_end = anchor.translate(0.0, config.spacing() * member_count as f64);
        out.push(SchematicElement::BusSegment(BusSegment {
            from: anchor,
            to: run_end,
            id: ids.next_id(),
        }));
    }

    for (i, signal) in entry.members().iter().enumerate() {
        let y = config.start_y() + config.spacing() * (i + 1) as f64;
        let wire_start = Point::new(anchor_x + STUB_LENGTH, y);
        let wire_end = wire_start.translate(config.connection_length(), 0.0);

        out.push(SchematicElement::BusEntry(BusEntry {
            at: Point::new(anchor_x, y - STUB_LENGTH),
            size: Size::square(STUB_LENGTH),
            id: ids.next_id(),
        }));

        out.push(SchematicElement::Wire(Wire {
            from: wire_start,
            to: wire_end,
            id: ids.next_id(),
        }));

        out.push(SchematicElement::SignalLabel(SignalLabel {
            text: signal.clone(),
            at: wire_end,
            angle: LABEL_ANGLE,
            id: ids.next_id(),
        }));
    }
}
