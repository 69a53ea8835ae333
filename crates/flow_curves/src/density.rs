//! Spatial bucket index over the points of accepted curves.
//!
//! [`DensityGrid`] partitions the field extent into square cells of side `d_sep`. Every point
//! of an accepted curve is committed into the cell containing it, and candidate steps are
//! validated against the 3×3 neighbourhood of their own cell.
//!
//! Cells are [`DensityCell`]s: fixed-capacity lists that drop points once saturated, which
//! keeps memory bounded on very dense fields at the price of occasional missed neighbours.
use glam::DVec2;

use crate::curve::Curve;
use crate::error::{Error, Result};

/// Default per-cell point capacity.
pub const DEFAULT_CELL_CAPACITY: usize = 2000;

/// Fraction of `d_sep` shaved off the separation test, so points at `0.99 × d_sep` or closer
/// are rejected. Absorbs floating point error in the distance computation.
pub const SEPARATION_SLACK: f64 = 0.01;

/// Saturating list of committed points.
///
/// A cell with capacity `c` stores at most `c - 1` points; further pushes are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DensityCell {
    points: Vec<DVec2>,
    capacity: usize,
}

impl DensityCell {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::new(),
            capacity,
        }
    }

    /// Stores `p` if there is room left. Returns `false` when the point was dropped.
    #[inline]
    pub fn push(&mut self, p: DVec2) -> bool {
        if self.points.len() + 1 < self.capacity {
            self.points.push(p);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once further pushes would be dropped.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.points.len() + 1 >= self.capacity
    }
}

/// Cell columns, rows and total count for a field of the given size, or `None` when `d_sep`
/// is not a positive finite number or the cell storage would exceed `isize::MAX` bytes.
pub(crate) fn grid_dimensions(
    field_width: usize,
    field_height: usize,
    d_sep: f64,
) -> Option<(usize, usize, usize)> {
    if !d_sep.is_finite() || d_sep <= 0.0 {
        return None;
    }
    let limit = isize::MAX as f64;
    let width = (field_width as f64 / d_sep).floor();
    let height = (field_height as f64 / d_sep).floor();
    if width >= limit || height >= limit {
        return None;
    }
    let (width, height) = (width as usize, height as usize);
    let count = width.checked_mul(height)?;
    let bytes = count.checked_mul(std::mem::size_of::<DensityCell>())?;
    (bytes <= isize::MAX as usize).then_some((width, height, count))
}

/// Separation index shared by all trace calls of one placement run.
#[derive(Clone, Debug)]
pub struct DensityGrid {
    d_sep: f64,
    width: usize,
    height: usize,
    cells: Vec<DensityCell>,
    dropped: usize,
}

impl DensityGrid {
    /// Builds a grid of `⌊width / d_sep⌋ × ⌊height / d_sep⌋` cells.
    ///
    /// A non-finite or non-positive `d_sep`, or one so small that the cell storage could not
    /// be addressed, yields an empty grid that rejects every step; use
    /// [`DensityGrid::try_new`] to surface that as an error instead.
    pub fn new(field_width: usize, field_height: usize, d_sep: f64, cell_capacity: usize) -> Self {
        debug_assert!(d_sep.is_finite() && d_sep > 0.0, "d_sep must be > 0");
        let (width, height, count) =
            grid_dimensions(field_width, field_height, d_sep).unwrap_or((0, 0, 0));

        Self {
            d_sep,
            width,
            height,
            cells: vec![DensityCell::new(cell_capacity); count],
            dropped: 0,
        }
    }

    pub fn try_new(
        field_width: usize,
        field_height: usize,
        d_sep: f64,
        cell_capacity: usize,
    ) -> Result<Self> {
        if !d_sep.is_finite() || d_sep <= 0.0 {
            return Err(Error::invalid("d_sep must be finite and > 0"));
        }
        if cell_capacity == 0 {
            return Err(Error::invalid("cell_capacity must be > 0"));
        }
        if grid_dimensions(field_width, field_height, d_sep).is_none() {
            return Err(Error::invalid(format!(
                "d_sep {d_sep} is too small for a {field_width}x{field_height} field"
            )));
        }
        Ok(Self::new(field_width, field_height, d_sep, cell_capacity))
    }

    #[inline]
    pub fn d_sep(&self) -> f64 {
        self.d_sep
    }

    /// Number of cells along X.
    #[inline]
    pub fn grid_width(&self) -> usize {
        self.width
    }

    /// Number of cells along Y.
    #[inline]
    pub fn grid_height(&self) -> usize {
        self.height
    }

    /// Total number of stored points.
    pub fn point_count(&self) -> usize {
        self.cells.iter().map(DensityCell::len).sum()
    }

    /// Number of in-bounds points dropped by saturated cells.
    #[inline]
    pub fn dropped_points(&self) -> usize {
        self.dropped
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&DensityCell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(col + self.width * row)
    }

    #[inline]
    fn cell_coords(&self, p: DVec2) -> (isize, isize) {
        (
            (p.x / self.d_sep).floor() as isize,
            (p.y / self.d_sep).floor() as isize,
        )
    }

    #[inline]
    fn index(&self, col: isize, row: isize) -> isize {
        col + self.width as isize * row
    }

    /// Returns `true` when `p` falls in the first row/column, or outside the grid.
    pub fn off_boundaries(&self, p: DVec2) -> bool {
        let (col, row) = self.cell_coords(p);
        col <= 0 || row <= 0 || col >= self.width as isize || row >= self.height as isize
    }

    /// Checks that no committed point lies within `0.99 × d_sep` of `p`.
    pub fn is_valid_next_step(&self, p: DVec2) -> bool {
        if self.off_boundaries(p) {
            return false;
        }

        let (col, row) = self.cell_coords(p);
        // Row end is clamped by the grid width and column end by the grid height.
        let start_row = (row - 1).max(0);
        let end_row = if row + 1 < self.width as isize { row + 1 } else { row };
        let start_col = (col - 1).max(0);
        let end_col = if col + 1 < self.height as isize { col + 1 } else { col };

        let d_test = self.d_sep - SEPARATION_SLACK * self.d_sep;
        for c in start_col..=end_col {
            for r in start_row..=end_row {
                let Some(cell) = usize::try_from(self.index(c, r))
                    .ok()
                    .and_then(|i| self.cells.get(i))
                else {
                    continue;
                };
                if cell.points().iter().any(|q| p.distance(*q) <= d_test) {
                    return false;
                }
            }
        }

        true
    }

    /// Commits a single point. Returns `true` if it was stored.
    pub fn insert_coord(&mut self, p: DVec2) -> bool {
        if self.off_boundaries(p) {
            return false;
        }
        let (col, row) = self.cell_coords(p);
        let idx = self.index(col, row) as usize;
        let stored = self.cells[idx].push(p);
        if !stored {
            self.dropped += 1;
        }
        stored
    }

    /// Commits every step of an accepted curve.
    pub fn insert_curve_coords(&mut self, curve: &Curve) {
        for p in curve.points() {
            self.insert_coord(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Direction;

    fn grid() -> DensityGrid {
        DensityGrid::new(10, 10, 1.0, DEFAULT_CELL_CAPACITY)
    }

    #[test]
    fn dimensions_floor_extent_over_d_sep() {
        let g = DensityGrid::new(10, 7, 3.0, 4);
        assert_eq!((g.grid_width(), g.grid_height()), (3, 2));
        assert_eq!(g.d_sep(), 3.0);
    }

    #[test]
    fn try_new_rejects_bad_separation() {
        assert!(DensityGrid::try_new(10, 10, 0.0, 4).is_err());
        assert!(DensityGrid::try_new(10, 10, -1.0, 4).is_err());
        assert!(DensityGrid::try_new(10, 10, f64::NAN, 4).is_err());
        assert!(DensityGrid::try_new(10, 10, 1.0, 0).is_err());
        assert!(DensityGrid::try_new(10, 10, 1.0, 4).is_ok());
    }

    #[test]
    fn first_row_and_column_are_off_boundaries() {
        let g = grid();
        assert!(!g.is_valid_next_step(DVec2::new(0.5, 5.0)));
        assert!(!g.is_valid_next_step(DVec2::new(5.0, 0.5)));
        assert!(!g.is_valid_next_step(DVec2::new(10.0, 5.0)));
        assert!(!g.is_valid_next_step(DVec2::new(-3.0, 5.0)));
        assert!(!g.is_valid_next_step(DVec2::new(f64::NAN, 5.0)));
        assert!(g.is_valid_next_step(DVec2::new(1.0, 1.0)));
    }

    #[test]
    fn rejects_points_within_tolerance() {
        let mut g = grid();
        assert!(g.insert_coord(DVec2::new(5.0, 5.0)));

        assert!(!g.is_valid_next_step(DVec2::new(5.5, 5.0)));
        assert!(!g.is_valid_next_step(DVec2::new(5.0, 5.9)));
        assert!(g.is_valid_next_step(DVec2::new(5.0, 6.0)));
        assert!(g.is_valid_next_step(DVec2::new(6.5, 6.5)));
    }

    #[test]
    fn insert_coord_ignores_off_grid_points() {
        let mut g = grid();
        assert!(!g.insert_coord(DVec2::new(0.2, 0.2)));
        assert!(!g.insert_coord(DVec2::new(12.0, 3.0)));
        assert_eq!(g.point_count(), 0);
        assert_eq!(g.dropped_points(), 0);
    }

    #[test]
    fn saturated_cell_drops_points() {
        let mut g = DensityGrid::new(10, 10, 2.0, 3);
        assert!(g.insert_coord(DVec2::new(4.1, 4.1)));
        assert!(g.insert_coord(DVec2::new(4.2, 4.2)));
        assert!(!g.insert_coord(DVec2::new(4.3, 4.3)));

        let cell = g.cell(2, 2).unwrap();
        assert_eq!(cell.len(), 2);
        assert!(cell.is_saturated());
        assert_eq!(g.point_count(), 2);
        assert_eq!(g.dropped_points(), 1);
        // Dropped point is invisible to separation queries.
        assert_eq!(cell.points(), &[DVec2::new(4.1, 4.1), DVec2::new(4.2, 4.2)]);
    }

    #[test]
    fn capacity_one_stores_nothing() {
        let mut cell = DensityCell::new(1);
        assert!(!cell.push(DVec2::ONE));
        assert!(cell.is_empty());
        assert_eq!(cell.capacity(), 1);
    }

    #[test]
    fn insert_curve_coords_commits_every_step() {
        let mut curve = Curve::new(0);
        curve.insert_step(DVec2::new(5.0, 5.0), Direction::Backward);
        curve.insert_step(DVec2::new(4.0, 5.0), Direction::Backward);
        curve.insert_step(DVec2::new(6.0, 5.0), Direction::Forward);

        let mut g = grid();
        g.insert_curve_coords(&curve);
        assert_eq!(g.point_count(), 3);
        assert_eq!(g.cell(4, 5).unwrap().points(), &[DVec2::new(4.0, 5.0)]);
    }

    #[test]
    fn unaddressable_grid_is_rejected() {
        assert!(matches!(
            DensityGrid::try_new(10, 10, 1e-18, 4),
            Err(Error::InvalidParameter(_))
        ));
        // Each side fits, the product does not.
        assert!(DensityGrid::try_new(1 << 40, 1 << 40, 1.0, 4).is_err());
        assert!(grid_dimensions(10, 10, 1e-18).is_none());
        assert_eq!(grid_dimensions(10, 4, 2.0), Some((5, 2, 10)));
    }

    #[test]
    fn unaddressable_grid_falls_back_to_empty() {
        let g = DensityGrid::new(10, 10, 1e-18, 4);
        assert_eq!((g.grid_width(), g.grid_height()), (0, 0));
        assert!(!g.is_valid_next_step(DVec2::new(5.0, 5.0)));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn invalid_separation_builds_empty_grid_in_release() {
        let g = DensityGrid::new(10, 10, 0.0, 4);
        assert_eq!((g.grid_width(), g.grid_height()), (0, 0));
        assert!(!g.is_valid_next_step(DVec2::new(5.0, 5.0)));
    }

    #[test]
    fn non_square_grid_skips_missing_neighbours() {
        // Width 5, height 2: the row clamp uses the width, so row + 1 may fall past the end.
        let mut g = DensityGrid::new(10, 4, 2.0, DEFAULT_CELL_CAPACITY);
        assert_eq!((g.grid_width(), g.grid_height()), (5, 2));
        g.insert_coord(DVec2::new(3.0, 3.0));
        assert!(!g.is_valid_next_step(DVec2::new(3.5, 3.5)));
        assert!(g.is_valid_next_step(DVec2::new(7.0, 3.0)));
    }
}
