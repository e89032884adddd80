//! CLI logic for the busfold bus unfolder.
//!
//! This module contains the core CLI logic for the busfold tool: the
//! non-interactive equivalents of the original selection workflow
//! (listing buses, naming buses and member subsets on the command line)
//! around the library's parse and generate calls.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use busfold::{
    BusfoldError, Unfolder,
    bus::{BusSelection, BusTable, Selection},
    config::GenerationConfig,
};

/// Run the busfold CLI application
///
/// Parses the input schematic, then either lists the buses it defines or
/// generates the fan-out fragment for the requested selection and writes
/// it to the output path (stdout when none is given).
///
/// # Errors
///
/// Returns `BusfoldError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors (including a schematic with no bus aliases)
/// - Selection and configuration validation errors
pub fn run(args: &Args) -> Result<(), BusfoldError> {
    info!(input_path = args.input; "Processing schematic");

    // Load configuration, then apply command-line geometry overrides
    let app_config = config::load_config(args.config.as_ref())?;
    let generation = apply_overrides(app_config.into_generation(), args);

    // Parse the schematic into the bus table
    let table = busfold_parser::parse_file(&args.input)?;

    if args.list {
        print_table(&table);
        return Ok(());
    }

    let selection = build_selection(&table, args);

    let unfolder = Unfolder::new(generation);
    let fragment = unfolder.generate(&table, &selection)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &fragment)?;
            info!(output_path = path.as_str(); "Fragment written");
        }
        None => print!("{fragment}"),
    }

    Ok(())
}

/// Folds the command-line geometry flags into the loaded configuration.
fn apply_overrides(mut config: GenerationConfig, args: &Args) -> GenerationConfig {
    if let Some(spacing) = args.spacing {
        config = config.with_spacing(spacing);
    }
    if let Some(connection_length) = args.connection_length {
        config = config.with_connection_length(connection_length);
    }
    if let Some(start_x) = args.start_x {
        config = config.with_start_x(start_x);
    }
    if let Some(start_y) = args.start_y {
        config = config.with_start_y(start_y);
    }
    if let Some(bus_pitch) = args.bus_pitch {
        config = config.with_bus_pitch(bus_pitch);
    }
    config
}

/// Builds the ordered selection from `--all` or the repeated `--bus`
/// flags.
///
/// A bare `NAME` selects every member of that bus; `NAME=SIG1,SIG2`
/// selects the listed subset in the given order. Unknown bus names pass
/// through unresolved so the generator reports them with context, and no
/// flags at all yields an empty selection the generator rejects.
fn build_selection(table: &BusTable, args: &Args) -> Selection {
    if args.all {
        return Selection::all_buses(table);
    }

    args.buses
        .iter()
        .map(|spec| match spec.split_once('=') {
            Some((name, members)) => BusSelection::new(
                name.trim(),
                members
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            None => match table.get(spec.trim()) {
                Some(bus) => BusSelection::all_of(bus),
                None => BusSelection::new(spec.trim(), Vec::new()),
            },
        })
        .collect()
}

/// Prints the bus table the way the original tool's checklist showed it.
fn print_table(table: &BusTable) {
    for bus in table {
        if bus.members().is_empty() {
            println!("{} (no members)", bus.name());
        } else {
            println!("{} ({}): {}", bus.name(), bus.members().len(), bus.members().join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(buses: &[&str], all: bool) -> Args {
        Args {
            input: "unused.kicad_sch".to_string(),
            output: None,
            list: false,
            buses: buses.iter().map(|b| b.to_string()).collect(),
            all,
            spacing: None,
            connection_length: None,
            start_x: None,
            start_y: None,
            bus_pitch: None,
            config: None,
            log_level: "off".to_string(),
        }
    }

    fn table() -> BusTable {
        let mut table = BusTable::new();
        table.insert(busfold::bus::BusDefinition::new(
            "DATA",
            vec!["D0".to_string(), "D1".to_string()],
        ));
        table.insert(busfold::bus::BusDefinition::new("CTRL", vec!["RD".to_string()]));
        table
    }

    #[test]
    fn bare_bus_name_selects_all_members() {
        let selection = build_selection(&table(), &args_for(&["DATA"], false));
        assert_eq!(selection.entries().len(), 1);
        assert_eq!(selection.entries()[0].members(), ["D0", "D1"]);
    }

    #[test]
    fn member_subset_spec_is_honored_in_order() {
        let selection = build_selection(&table(), &args_for(&["DATA=D1,D0"], false));
        assert_eq!(selection.entries()[0].members(), ["D1", "D0"]);
    }

    #[test]
    fn all_flag_selects_every_bus_in_table_order() {
        let selection = build_selection(&table(), &args_for(&[], true));
        let names: Vec<&str> = selection.entries().iter().map(|e| e.bus()).collect();
        assert_eq!(names, ["DATA", "CTRL"]);
    }

    #[test]
    fn unknown_bare_name_passes_through_for_validation() {
        let selection = build_selection(&table(), &args_for(&["NOPE"], false));
        assert_eq!(selection.entries()[0].bus(), "NOPE");
        assert!(selection.entries()[0].members().is_empty());
    }

    #[test]
    fn geometry_flags_override_config() {
        let mut args = args_for(&[], true);
        args.spacing = Some(5.08);
        args.bus_pitch = Some(12.7);

        let config = apply_overrides(GenerationConfig::default(), &args);
        assert_eq!(config.spacing(), 5.08);
        assert_eq!(config.bus_pitch(), 12.7);
        assert_eq!(config.connection_length(), 10.16);
    }
}
