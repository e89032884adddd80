//! Geometric primitives for schematic element placement.
//!
//! This module provides the fundamental geometric types used when computing
//! positions and sizes of generated schematic elements.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in schematic space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Busfold uses the Eeschema sheet coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the sheet at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//! - **Units**: Millimetres, as stored in `.kicad_sch` files

/// A 2D point representing a position on a schematic sheet.
///
/// Points use `f64` coordinates in millimetres. The coordinate system has
/// origin at top-left with Y increasing downward (see
/// [module documentation](self) for details).
///
/// # Examples
///
/// ```
/// # use busfold_core::geometry::Point;
/// let anchor = Point::new(194.31, 49.53);
/// let below = anchor.translate(0.0, 2.54);
///
/// assert_eq!(below.x(), 194.31);
/// assert!((below.y() - 52.07).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Returns a new point shifted by the given offsets.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height dimensions of a schematic element.
///
/// Used for fixed-size glyphs such as bus entries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a square size with equal width and height
    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }
}
