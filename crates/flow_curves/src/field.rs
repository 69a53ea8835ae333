//! Direction fields sampled by the curve tracer.
//!
//! - Implement [`DirectionField`] to plug in a custom angle source.
//! - [`FlowField`] is the grid-backed implementation: a square matrix of angles in radians,
//!   sampled at the nearest containing cell (no interpolation).
use glam::DVec2;

use crate::error::{Error, Result};

/// Read-only sampler of flow directions over the open square `(0, width)²`.
pub trait DirectionField {
    /// Side length of the sampling domain.
    fn width(&self) -> usize;

    /// Returns `true` when `p` lies outside the open domain. NaN coordinates count as outside.
    #[inline]
    fn off_boundaries(&self, p: DVec2) -> bool {
        let w = self.width() as f64;
        !(p.x > 0.0 && p.y > 0.0 && p.x < w && p.y < w)
    }

    /// Direction angle in radians at `p`, or [`Error::OutOfBounds`] outside the domain.
    fn angle(&self, p: DVec2) -> Result<f64>;
}

/// Square grid of direction angles.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField {
    width: usize,
    /// Row-major: cell `(col, row)` lives at `row * width + col`.
    angles: Vec<f64>,
}

impl FlowField {
    /// Creates a field from `width * width` row-major angles.
    pub fn new(width: usize, angles: Vec<f64>) -> Result<Self> {
        if width == 0 {
            return Err(Error::invalid("field width must be > 0"));
        }
        if width.checked_mul(width) != Some(angles.len()) {
            return Err(Error::invalid(format!(
                "expected {width}x{width} angles, got {}",
                angles.len()
            )));
        }
        Ok(Self { width, angles })
    }

    /// Creates a field by evaluating `f(col, row)` for every cell.
    pub fn from_fn(width: usize, mut f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        let mut angles = Vec::with_capacity(width * width);
        for row in 0..width {
            for col in 0..width {
                angles.push(f(col, row));
            }
        }
        Self::new(width, angles)
    }

    /// Creates a field from a column-indexed matrix, `columns[col][row]`.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let width = columns.len();
        if let Some((col, column)) = columns.iter().enumerate().find(|(_, c)| c.len() != width) {
            return Err(Error::invalid(format!(
                "column {col} has {} rows, expected {width}",
                column.len()
            )));
        }
        Self::from_fn(width, |col, row| columns[col][row])
    }

    /// Angle stored at cell `(col, row)`, if it exists.
    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.width {
            return None;
        }
        Some(self.angles[row * self.width + col])
    }
}

impl DirectionField for FlowField {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    fn angle(&self, p: DVec2) -> Result<f64> {
        if self.off_boundaries(p) {
            return Err(Error::OutOfBounds { x: p.x, y: p.y });
        }
        let col = p.x.floor() as usize;
        let row = p.y.floor() as usize;
        self.cell(col, row).ok_or(Error::OutOfBounds { x: p.x, y: p.y })
    }
}
