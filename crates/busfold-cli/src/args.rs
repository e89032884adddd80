//! Command-line argument definitions for the busfold CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the input schematic, bus
//! selection, geometry overrides, configuration file selection, and
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the busfold bus unfolder
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input KiCad schematic
    #[arg(help = "Path to the input .kicad_sch file")]
    pub input: String,

    /// Path for the generated fragment; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// List the buses found in the schematic and exit
    #[arg(long)]
    pub list: bool,

    /// Select a bus, optionally with a member subset: NAME or NAME=SIG1,SIG2.
    /// Repeatable; order controls left-to-right placement
    #[arg(long = "bus", value_name = "NAME[=SIG,..]")]
    pub buses: Vec<String>,

    /// Select every bus with all of its members
    #[arg(long, conflicts_with = "buses")]
    pub all: bool,

    /// Vertical distance between signal wires, in mm
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Horizontal length of each signal wire, in mm
    #[arg(long)]
    pub connection_length: Option<f64>,

    /// Anchor x-coordinate of the first bus, in mm
    #[arg(long)]
    pub start_x: Option<f64>,

    /// Anchor y-coordinate of the bus labels, in mm
    #[arg(long)]
    pub start_y: Option<f64>,

    /// Horizontal gap added between successive buses, in mm
    #[arg(long)]
    pub bus_pitch: Option<f64>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
