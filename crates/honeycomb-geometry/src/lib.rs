//! Honeycomb Geometry
//!
//! Hexagonal grid coordinates and the packing optimizer behind the honeycomb
//! panel.
//!
//! # Coordinate Systems
//!
//! Cells are identified by cube coordinates (x, y, z) with x + y + z = 0.
//! Two 2D projections are derived from them:
//! - **Offset**: row-shifted addressing where every other row is pushed
//!   half a cell sideways (the layout used to fill a rectangle row by row)
//! - **Axial**: plain (x, z) projection, the input of the pixel transform
//!
//! Pixel positions use the pointy-top transform scaled by the circumradius.
//!
//! # Packing
//!
//! [`optimize`] grows the inner radius in fixed steps from a minimum of one
//! pixel and keeps the last candidate whose rows × cols grid still fits the
//! rectangle. The search stops at the first candidate that does not fit.
//!
//! ```
//! use honeycomb_geometry::optimize;
//!
//! let layout = optimize(200.0, 200.0, 4).expect("four hexagons fit");
//! assert!(layout.capacity() >= 4);
//! ```

mod cube;
mod error;
mod optimizer;
mod pixel;

pub use cube::{Cube, Hex, axial_to_cube, cube_to_axial, cube_to_offset, offset_to_cube};
pub use error::{GeometryError, Result};
pub use optimizer::{
    Candidate, Layout, Optimizer, SearchConfig, hexes_fit, optimize, staggered_fit,
};
pub use pixel::{
    FractionalHex, Point, axial_to_pixel, degrees_to_radians, hexagon_corners, pixel_to_axial,
    radians_to_degrees,
};

/// Ratio of circumradius to inner radius: R = (2/√3) · r.
pub const OUTER_PER_INNER: f64 = 1.154_700_538_379_251_5;

/// Smallest inner radius the optimizer will try, in pixels.
pub const MIN_INNER_RADIUS: f64 = 1.0;

/// Increment between two optimizer candidates, in pixels.
pub const SEARCH_STEP: f64 = 0.01;

/// Corners of a hexagon.
pub const HEXAGON_CORNERS: usize = 6;
