//! Honeycomb packing optimizer.
//!
//! Finds the largest hexagon that lets N cells fit a rectangle as a
//! rows × cols grid. Each column is one flat-to-flat width (2r) wide and
//! each row is budgeted one vertex-to-vertex height (2R).
//!
//! # Search
//!
//! Candidate inner radii are `start + k · step` for k = 0, 1, 2, ... below
//! the rectangle width. The feasibility test is a step function of r with no
//! closed-form inverse, so candidates are probed in order and the search
//! stops at the first infeasible one. The last feasible candidate wins.
//!
//! A staggered search additionally budgets the half-column offset of odd
//! rows, so a grid of two or more rows needs `cols · 2r + r` of width. Use
//! it when every hexagon must stay inside the rectangle.
//!
//! This assumes feasibility is unimodal in r. For some aspect ratios a larger
//! feasible radius may exist past an infeasible one; it is not explored.

use crate::error::{GeometryError, Result};
use crate::{MIN_INNER_RADIUS, OUTER_PER_INNER, SEARCH_STEP};

/// Parameters of the radius search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// First inner radius tried, in pixels
    pub start: f64,
    /// Increment between candidates, in pixels
    pub step: f64,
    /// Probe with [`staggered_fit`] instead of [`hexes_fit`]
    #[cfg_attr(feature = "serde", serde(default))]
    pub staggered: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: MIN_INNER_RADIUS,
            step: SEARCH_STEP,
            staggered: false,
        }
    }
}

impl SearchConfig {
    /// Check that the search can make progress.
    pub fn validate(&self) -> Result<()> {
        if !(self.start.is_finite() && self.start > 0.0) {
            return Err(GeometryError::InvalidStart(self.start));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(GeometryError::InvalidStep(self.step));
        }
        Ok(())
    }

    /// Default search with the odd-row offset budgeted.
    pub fn staggered() -> Self {
        Self {
            staggered: true,
            ..Self::default()
        }
    }

    /// Inner radius of the k-th candidate.
    ///
    /// Computed from k rather than accumulated so repeated searches produce
    /// bit-identical radii.
    #[inline]
    pub fn radius_at(&self, k: u64) -> f64 {
        self.start + k as f64 * self.step
    }
}

/// Outcome of probing a single inner radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub valid: bool,
    pub rows: usize,
    pub cols: usize,
    /// Circumradius R derived from the probed inner radius
    pub outer_radius: f64,
}

/// A feasible packing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    /// Circumradius R: center to vertex
    pub outer_radius: f64,
    /// Inner radius r: half the flat-to-flat width
    pub inner_radius: f64,
}

impl Layout {
    /// Number of cells in the grid.
    pub const fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Horizontal extent budgeted by the grid.
    pub fn width(&self) -> f64 {
        self.cols as f64 * 2.0 * self.inner_radius
    }

    /// Vertical extent budgeted by the grid.
    pub fn height(&self) -> f64 {
        self.rows as f64 * 2.0 * self.outer_radius
    }
}

/// Probe whether `n` hexagons of inner radius `r` fit a `width` × `height`
/// rectangle.
pub fn hexes_fit(r: f64, width: f64, height: f64, n: usize) -> Candidate {
    let outer_radius = OUTER_PER_INNER * r;
    let cols = (width / (2.0 * r)).floor();

    // Not even one column: nothing to divide by.
    if !(cols >= 1.0) {
        return Candidate {
            valid: false,
            rows: 0,
            cols: 0,
            outer_radius,
        };
    }

    let cols = cols as usize;
    let rows = n.div_ceil(cols);

    let overflows = height < rows as f64 * (2.0 * outer_radius)
        || width < cols as f64 * (2.0 * r);

    Candidate {
        valid: !overflows && n <= rows * cols,
        rows,
        cols,
        outer_radius,
    }
}

/// Like [`hexes_fit`], but a grid of two or more rows must also fit the
/// half-column offset of its odd rows: `cols · 2r + r <= width`.
pub fn staggered_fit(r: f64, width: f64, height: f64, n: usize) -> Candidate {
    let flat = hexes_fit(r, width, height, n);
    if flat.rows <= 1 {
        return flat;
    }
    hexes_fit(r, width - r, height, n)
}

/// Radius search over a fixed [`SearchConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimizer {
    config: SearchConfig,
}

impl Optimizer {
    /// Create an optimizer, rejecting configurations that cannot progress.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Largest feasible packing of `n` hexagons into `width` × `height`.
    ///
    /// Returns `None` when the rectangle is empty or not even the first
    /// candidate fits. `n == 0` is feasible: it yields zero rows.
    pub fn optimize(&self, width: f64, height: f64, n: usize) -> Option<Layout> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return None;
        }

        let mut best = None;
        for k in 0u64.. {
            let r = self.config.radius_at(k);
            if r >= width {
                break;
            }

            let candidate = if self.config.staggered {
                staggered_fit(r, width, height, n)
            } else {
                hexes_fit(r, width, height, n)
            };
            if !candidate.valid {
                break;
            }

            best = Some(Layout {
                rows: candidate.rows,
                cols: candidate.cols,
                outer_radius: candidate.outer_radius,
                inner_radius: r,
            });
        }
        best
    }
}

/// Largest feasible packing using the default search.
pub fn optimize(width: f64, height: f64, n: usize) -> Option<Layout> {
    Optimizer::default().optimize(width, height, n)
}
