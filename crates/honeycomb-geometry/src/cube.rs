//! Cube coordinates and their 2D projections.
//!
//! Cube coordinates use three axes (x, y, z) at 120 degrees with the
//! constraint x + y + z = 0. Only two of them are independent, so every
//! conversion here reads x and z and derives y.
//!
//! The offset projection shifts odd rows by half a cell, which turns a
//! rows × cols block of cube cells into a staggered honeycomb.

use crate::error::{GeometryError, Result};

/// A hexagon cell in cube coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Cube {
    /// Origin of the grid.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a cube coordinate, checking x + y + z = 0.
    pub fn try_new(x: i64, y: i64, z: i64) -> Result<Self> {
        if x + y + z != 0 {
            return Err(GeometryError::CubeConstraint { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// Create a cube coordinate from its x and z components.
    pub const fn from_xz(x: i64, z: i64) -> Self {
        Self { x, y: -x - z, z }
    }

    /// Whether the components satisfy x + y + z = 0.
    pub const fn is_valid(&self) -> bool {
        self.x + self.y + self.z == 0
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A cell address as (col, row).
///
/// Whether it is an offset or an axial address depends on the conversion
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    pub col: i64,
    pub row: i64,
}

impl Hex {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

/// Half of `n` rounded up. `n + (n & 1)` is always even, negatives included.
#[inline]
const fn half_up(n: i64) -> i64 {
    (n + (n & 1)) / 2
}

/// Project a cube onto the row-shifted offset grid.
pub fn cube_to_offset(cube: Cube) -> Hex {
    Hex {
        col: cube.x - half_up(cube.z),
        row: cube.z,
    }
}

/// Inverse of [`cube_to_offset`].
pub fn offset_to_cube(hex: Hex) -> Cube {
    Cube::from_xz(hex.col + half_up(hex.row), hex.row)
}

/// Project a cube onto axial (col, row) without any row shift.
pub fn cube_to_axial(cube: Cube) -> Hex {
    Hex {
        col: cube.x,
        row: cube.z,
    }
}

/// Inverse of [`cube_to_axial`].
pub fn axial_to_cube(hex: Hex) -> Cube {
    Cube::from_xz(hex.col, hex.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn origin_is_zero() {
        assert_eq!(Cube::ORIGIN, Cube::from_xz(0, 0));
        assert_eq!(cube_to_offset(Cube::ORIGIN), Hex::new(0, 0));
    }

    #[test]
    fn try_new_checks_constraint() {
        assert!(Cube::try_new(1, -2, 1).is_ok());
        assert_eq!(
            Cube::try_new(1, 0, 1),
            Err(GeometryError::CubeConstraint { x: 1, y: 0, z: 1 })
        );
    }

    #[test]
    fn from_xz_derives_y() {
        let coords = [
            Cube::from_xz(0, 0),
            Cube::from_xz(3, -1),
            Cube::from_xz(-7, 4),
        ];
        for c in coords {
            assert!(c.is_valid());
        }
    }

    #[test]
    fn offset_example() {
        let cube = Cube::try_new(1, -2, 1).unwrap();
        let hex = cube_to_offset(cube);
        assert_eq!(hex, Hex::new(0, 1));
        assert_eq!(offset_to_cube(hex), cube);
    }

    #[test]
    fn odd_rows_shift_by_half_cell() {
        // Row 0: columns unchanged. Row 1 and 2: shifted back by one.
        assert_eq!(cube_to_offset(Cube::from_xz(3, 0)), Hex::new(3, 0));
        assert_eq!(cube_to_offset(Cube::from_xz(3, 1)), Hex::new(2, 1));
        assert_eq!(cube_to_offset(Cube::from_xz(3, 2)), Hex::new(2, 2));
        assert_eq!(cube_to_offset(Cube::from_xz(3, 3)), Hex::new(1, 3));
    }

    #[test]
    fn negative_rows_use_same_parity() {
        assert_eq!(cube_to_offset(Cube::from_xz(0, -1)), Hex::new(0, -1));
        assert_eq!(cube_to_offset(Cube::from_xz(0, -2)), Hex::new(1, -2));
    }

    #[test]
    fn axial_is_plain_projection() {
        let cube = Cube::from_xz(4, -3);
        assert_eq!(cube_to_axial(cube), Hex::new(4, -3));
        assert_eq!(axial_to_cube(Hex::new(4, -3)), cube);
    }

    proptest! {
        #[test]
        fn offset_round_trip(x in -10_000i64..10_000, z in -10_000i64..10_000) {
            let cube = Cube::from_xz(x, z);
            prop_assert_eq!(offset_to_cube(cube_to_offset(cube)), cube);
        }

        #[test]
        fn axial_round_trip(x in -10_000i64..10_000, z in -10_000i64..10_000) {
            let cube = Cube::from_xz(x, z);
            prop_assert_eq!(axial_to_cube(cube_to_axial(cube)), cube);
        }

        #[test]
        fn offset_inverse_from_hex_side(col in -10_000i64..10_000, row in -10_000i64..10_000) {
            let hex = Hex::new(col, row);
            prop_assert_eq!(cube_to_offset(offset_to_cube(hex)), hex);
        }
    }
}
