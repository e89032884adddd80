//! Busfold Core Types and Definitions
//!
//! This crate provides the foundational types for the busfold schematic
//! bus unfolder. It includes:
//!
//! - **Buses**: The parsed bus model and selection types ([`bus`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Elements**: Emitted schematic element records ([`element`] module)
//! - **Identifiers**: Injectable unique-identifier sources ([`identifier`] module)

pub mod bus;
pub mod element;
pub mod geometry;
pub mod identifier;
