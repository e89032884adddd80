//! The parsed bus model and generation selection types.
//!
//! # Overview
//!
//! - [`BusDefinition`] - One named bus with its ordered member signals
//! - [`BusTable`] - The ordered collection of buses extracted from a schematic
//! - [`Selection`] / [`BusSelection`] - The ordered subset of buses and
//!   members to unfold
//!
//! Member order is semantically meaningful throughout: it is the order of
//! first appearance in the source schematic and determines the vertical
//! stacking order of the generated wires. None of these types re-sort.

use log::debug;

/// A named bus alias together with its ordered member signal names.
///
/// Constructed by the parser in one pass and immutable afterwards. A bus
/// with no declared members is legal; unfolding it produces no fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusDefinition {
    name: String,
    members: Vec<String>,
}

impl BusDefinition {
    /// Creates a new bus definition.
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Returns the bus alias name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member signal names in source order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Returns `true` if the member name appears in this bus.
    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }
}

/// An insertion-ordered collection of [`BusDefinition`]s.
///
/// Iteration order is the order in which buses first appeared in the
/// source. Inserting a definition whose name is already present replaces
/// the earlier member list while keeping the original position
/// (last-write-wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusTable {
    buses: Vec<BusDefinition>,
}

impl BusTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a bus definition, replacing any earlier definition with the
    /// same name in place.
    pub fn insert(&mut self, bus: BusDefinition) {
        match self.buses.iter_mut().find(|b| b.name == bus.name) {
            Some(existing) => {
                debug!(bus = bus.name; "Replacing duplicate bus alias");
                *existing = bus;
            }
            None => self.buses.push(bus),
        }
    }

    /// Looks up a bus by name.
    pub fn get(&self, name: &str) -> Option<&BusDefinition> {
        self.buses.iter().find(|b| b.name == name)
    }

    /// Iterates over the buses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BusDefinition> {
        self.buses.iter()
    }

    /// Returns the number of buses in the table.
    pub fn len(&self) -> usize {
        self.buses.len()
    }

    /// Returns `true` if the table holds no buses.
    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}

impl<'a> IntoIterator for &'a BusTable {
    type Item = &'a BusDefinition;
    type IntoIter = std::slice::Iter<'a, BusDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.buses.iter()
    }
}

/// One selected bus together with the ordered members to emit for it.
///
/// The member list must preserve the bus's original member order; the
/// generator validates membership but never re-orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusSelection {
    bus: String,
    members: Vec<String>,
}

impl BusSelection {
    /// Creates a selection entry for the named bus and member subset.
    pub fn new(bus: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            bus: bus.into(),
            members,
        }
    }

    /// Creates a selection entry covering all members of the given bus.
    pub fn all_of(bus: &BusDefinition) -> Self {
        Self {
            bus: bus.name().to_string(),
            members: bus.members().to_vec(),
        }
    }

    /// Returns the selected bus name.
    pub fn bus(&self) -> &str {
        &self.bus
    }

    /// Returns the selected members in emission order.
    pub fn members(&self) -> &[String] {
        &self.members
    }
}

/// An ordered list of [`BusSelection`]s.
///
/// List order determines the left-to-right placement of the generated
/// fan-outs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<BusSelection>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection covering every bus in the table with all of its
    /// members, in table order.
    pub fn all_buses(table: &BusTable) -> Self {
        Self {
            entries: table.iter().map(BusSelection::all_of).collect(),
        }
    }

    /// Appends a selection entry.
    pub fn push(&mut self, entry: BusSelection) {
        self.entries.push(entry);
    }

    /// Returns the selection entries in placement order.
    pub fn entries(&self) -> &[BusSelection] {
        &self.entries
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<BusSelection> for Selection {
    fn from_iter<I: IntoIterator<Item = BusSelection>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
