//! Error adapter for rendering BusfoldError through miette.
//!
//! The library's error types are plain `std::error::Error`s; this module
//! wraps them in a [`miette::Diagnostic`] so the CLI can render them with
//! miette's graphical report handler, adding per-variant help text that
//! tells the user how to correct the input.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use busfold::BusfoldError;
use busfold_parser::ParseError;

/// Adapter wrapping a [`BusfoldError`] for graphical reporting.
pub struct ErrorAdapter<'a> {
    /// The wrapped error
    err: &'a BusfoldError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new adapter around the error.
    pub fn new(err: &'a BusfoldError) -> Self {
        Self { err }
    }

    /// Corrective guidance for the wrapped error, if any applies.
    fn help_text(&self) -> Option<&'static str> {
        match self.err {
            BusfoldError::Parse(ParseError::NoBuses) => Some(
                "the schematic has no (bus_alias ...) blocks; \
				 define a bus alias in Eeschema before unfolding",
            ),
            BusfoldError::Validation(_) => {
                Some("run with --list to see the buses and members the schematic defines")
            }
            _ => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter").field("err", &self.err).finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_text()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }
}
