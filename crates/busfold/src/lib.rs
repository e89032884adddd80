//! Busfold - unfold KiCad bus aliases into pasteable wire fan-outs.
//!
//! Parsing, layout, and serialization for bus unfolding: read a
//! `.kicad_sch`, pick buses and members, and get back schematic text that
//! fans each bus out into individual labelled wires.

pub mod config;

mod error;
mod export;
mod layout;

pub use busfold_core::{bus, element, geometry, identifier};

pub use error::{BusfoldError, ValidationError};

use log::{debug, info, trace};

use busfold_core::{
    bus::{BusTable, Selection},
    identifier::{IdSource, RandomIdSource},
};

use config::GenerationConfig;

/// Builder for parsing schematics and generating bus fan-outs.
///
/// Holds the generation configuration and drives the two stages an
/// external caller consumes in sequence: parse the schematic into a
/// [`BusTable`], then generate fragments for a [`Selection`] against that
/// table. The table is read-only after parsing, so one table can serve
/// any number of generation calls.
///
/// # Examples
///
/// ```rust
/// use busfold::{Unfolder, bus::Selection, config::GenerationConfig};
///
/// let source = r#"
/// (bus_alias "DATA"
///     (members "D0" "D1" "D2")
/// )
/// "#;
///
/// let unfolder = Unfolder::new(GenerationConfig::default());
///
/// // Parse source into the bus table
/// let table = unfolder.parse(source)
///     .expect("Failed to parse");
///
/// // Unfold every bus with all of its members
/// let fragment = unfolder.generate(&table, &Selection::all_buses(&table))
///     .expect("Failed to generate");
///
/// assert!(fragment.starts_with("(hierarchical_label"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unfolder {
    config: GenerationConfig,
}

impl Unfolder {
    /// Creates a new unfolder with the given generation configuration.
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Returns the generation configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Parses schematic source text into a [`BusTable`].
    ///
    /// # Errors
    ///
    /// Returns `BusfoldError::Parse` when the source contains no bus
    /// aliases; malformed surrounding content is skipped, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use busfold::Unfolder;
    ///
    /// let source = "(bus_alias \"CTRL\"\n\t(members \"RD\" \"WR\")\n)";
    /// let table = Unfolder::default().parse(source)
    ///     .expect("Failed to parse");
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn parse(&self, source: &str) -> Result<BusTable, BusfoldError> {
        info!("Parsing schematic for bus aliases");

        let table = busfold_parser::parse(source)?;

        debug!(buses = table.len(); "Schematic parsed");
        trace!(table:?; "Parsed bus table");

        Ok(table)
    }

    /// Generates the fan-out fragment for a selection, using random UUIDs.
    ///
    /// # Errors
    ///
    /// Returns `BusfoldError::Validation` when the configuration or the
    /// selection is unusable: non-positive spacing or connection length,
    /// an empty selection, an unknown bus or member, or a bus left with
    /// no members. Nothing is emitted on error.
    pub fn generate(
        &self,
        table: &BusTable,
        selection: &Selection,
    ) -> Result<String, BusfoldError> {
        let mut ids = RandomIdSource;
        self.generate_with_ids(table, selection, &mut ids)
    }

    /// Generates the fan-out fragment with a caller-supplied id source.
    ///
    /// Identical to [`generate`](Self::generate) except that element
    /// identifiers come from `ids`, which lets tests produce exact,
    /// reproducible output text.
    pub fn generate_with_ids(
        &self,
        table: &BusTable,
        selection: &Selection,
        ids: &mut dyn IdSource,
    ) -> Result<String, BusfoldError> {
        self.config.validate()?;
        validate_selection(table, selection)?;

        info!(buses = selection.entries().len(); "Generating bus fan-out");

        let elements = layout::unfold(selection.entries(), &self.config, ids);
        debug!(elements = elements.len(); "Layout complete");

        Ok(export::serialize(&elements))
    }
}

/// Checks a selection against the parsed table before any layout runs.
fn validate_selection(table: &BusTable, selection: &Selection) -> Result<(), ValidationError> {
    if selection.is_empty() {
        return Err(ValidationError::EmptySelection);
    }

    for entry in selection.entries() {
        let bus = table
            .get(entry.bus())
            .ok_or_else(|| ValidationError::UnknownBus(entry.bus().to_string()))?;

        if entry.members().is_empty() {
            return Err(ValidationError::NoMembers(entry.bus().to_string()));
        }

        for member in entry.members() {
            if !bus.contains(member) {
                return Err(ValidationError::UnknownMember {
                    bus: entry.bus().to_string(),
                    signal: member.clone(),
                });
            }
        }
    }

    Ok(())
}
