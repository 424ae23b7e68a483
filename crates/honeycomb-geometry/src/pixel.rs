//! Pixel space: the pointy-top axial transform and hexagon outlines.

use crate::cube::{cube_to_axial, Cube, Hex};
use crate::HEXAGON_CORNERS;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift by (dx, dy).
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A continuous axial address, as produced by [`pixel_to_axial`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FractionalHex {
    pub col: f64,
    pub row: f64,
}

impl FractionalHex {
    /// Snap to the axial cell containing this point.
    ///
    /// Rounds all three cube components and recomputes the one with the
    /// largest rounding error so the result keeps x + y + z = 0.
    pub fn round(&self) -> Hex {
        let x = self.col;
        let z = self.row;
        let y = -x - z;

        let mut rx = x.round();
        let ry = y.round();
        let mut rz = z.round();

        let dx = (rx - x).abs();
        let dy = (ry - y).abs();
        let dz = (rz - z).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dz >= dy {
            rz = -rx - ry;
        }

        cube_to_axial(Cube::from_xz(rx as i64, rz as i64))
    }
}

/// Center of an axial cell for hexagons of circumradius `size`.
pub fn axial_to_pixel(hex: Hex, size: f64) -> Point {
    let col = hex.col as f64;
    let row = hex.row as f64;
    Point {
        x: size * (SQRT_3 * col + SQRT_3 / 2.0 * row),
        y: size * (1.5 * row),
    }
}

/// Inverse of [`axial_to_pixel`].
pub fn pixel_to_axial(point: Point, size: f64) -> FractionalHex {
    FractionalHex {
        col: (SQRT_3 / 3.0 * point.x - point.y / 3.0) / size,
        row: (2.0 / 3.0 * point.y) / size,
    }
}

/// Corners of a pointy-top hexagon, clockwise in screen space from 30°.
pub fn hexagon_corners(center: Point, circumradius: f64) -> [Point; HEXAGON_CORNERS] {
    std::array::from_fn(|i| {
        let angle = degrees_to_radians(60.0 * i as f64 + 30.0);
        Point {
            x: center.x + circumradius * angle.cos(),
            y: center.y + circumradius * angle.sin(),
        }
    })
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn sqrt_3_constant() {
        assert!((SQRT_3 - 3.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn origin_maps_to_origin() {
        assert_eq!(axial_to_pixel(Hex::new(0, 0), 10.0), Point::ORIGIN);
    }

    #[test]
    fn unit_steps() {
        // One column east is √3·size, one row down is 1.5·size plus half a column.
        let east = axial_to_pixel(Hex::new(1, 0), 2.0);
        assert!(close(east.x, 2.0 * SQRT_3));
        assert!(close(east.y, 0.0));

        let south = axial_to_pixel(Hex::new(0, 1), 2.0);
        assert!(close(south.x, SQRT_3));
        assert!(close(south.y, 3.0));
    }

    #[test]
    fn round_snaps_to_cell() {
        let size = 12.0;
        let hex = Hex::new(-3, 5);
        let p = axial_to_pixel(hex, size).translate(2.0, -1.5);
        assert_eq!(pixel_to_axial(p, size).round(), hex);
    }

    #[test]
    fn corners_lie_on_circumcircle() {
        let center = Point::new(5.0, -2.0);
        let corners = hexagon_corners(center, 4.0);
        for c in corners {
            let d = ((c.x - center.x).powi(2) + (c.y - center.y).powi(2)).sqrt();
            assert!(close(d, 4.0));
        }
        // Pointy-top: first corner at 30° sits right of center and below it.
        assert!(close(corners[0].x, center.x + 2.0 * SQRT_3));
        assert!(close(corners[0].y, center.y + 2.0));
    }

    #[test]
    fn angle_conversion() {
        assert!(close(radians_to_degrees(std::f64::consts::PI), 180.0));
        assert!(close(degrees_to_radians(90.0), std::f64::consts::FRAC_PI_2));
    }

    proptest! {
        #[test]
        fn pixel_round_trip(
            col in -1_000i64..1_000,
            row in -1_000i64..1_000,
            size in 0.01f64..500.0,
        ) {
            let hex = Hex::new(col, row);
            let back = pixel_to_axial(axial_to_pixel(hex, size), size);
            prop_assert!(close(back.col, col as f64), "col {} vs {}", back.col, col);
            prop_assert!(close(back.row, row as f64), "row {} vs {}", back.row, row);
            prop_assert_eq!(back.round(), hex);
        }
    }
}
