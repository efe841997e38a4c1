//! Grid Configuration Module
//!
//! The build grid is a square, bounded plane centered on the origin and split
//! into `divisions` cells per axis. Cells are indexed by integer coordinates
//! over the symmetric range `[-half_cells, half_cells)`, so cell (0, 0) is
//! the first cell on the positive side of each axis.

use serde::{Deserialize, Serialize};

/// A single grid cell, identified by integer coordinates on the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Cell index along X
    pub ix: i32,
    /// Cell index along Z
    pub iz: i32,
}

impl Cell {
    pub const fn new(ix: i32, iz: i32) -> Self {
        Self { ix, iz }
    }

    /// Check whether this cell lies inside `[-half_cells, half_cells)` on
    /// both axes.
    pub const fn in_bounds(&self, half_cells: i32) -> bool {
        self.ix >= -half_cells
            && self.ix < half_cells
            && self.iz >= -half_cells
            && self.iz < half_cells
    }
}

/// Build grid configuration.
///
/// `size` is the world-space edge length of the grid plane and `divisions`
/// the number of cells along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// World-space edge length of the grid plane
    pub size: f32,
    /// Number of cells along each axis
    pub divisions: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        // 10x10 world with 1-unit cells
        Self {
            size: 10.0,
            divisions: 10,
        }
    }
}

impl GridConfig {
    pub const fn new(size: f32, divisions: u32) -> Self {
        Self { size, divisions }
    }

    /// World-space edge length of one cell.
    pub fn cell_size(&self) -> f32 {
        self.size / self.divisions as f32
    }

    /// Half the grid extent in cells; valid indices are
    /// `[-half_cells, half_cells)`.
    pub const fn half_cells(&self) -> i32 {
        (self.divisions / 2) as i32
    }

    /// Map a world coordinate to the index of the cell containing it.
    pub fn world_to_index(&self, coord: f32) -> i32 {
        (coord / self.cell_size()).floor() as i32
    }

    /// Map a world XZ position to its containing cell.
    pub fn cell_at(&self, x: f32, z: f32) -> Cell {
        Cell::new(self.world_to_index(x), self.world_to_index(z))
    }

    /// Snap a world coordinate for an object spanning `span` cells along
    /// that axis. See [`cell_snap`].
    pub fn snap(&self, coord: f32, span: i32) -> f32 {
        cell_snap(coord, span, self.cell_size())
    }

    /// Load a grid configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Snap a world coordinate to a footprint-aligned position.
///
/// Odd spans center the object inside one cell; even spans align the
/// object's center to a grid-line intersection so it straddles the anchor
/// symmetrically. Snapping is idempotent: re-snapping a snapped coordinate
/// returns it unchanged.
pub fn cell_snap(coord: f32, span: i32, cell_size: f32) -> f32 {
    if span % 2 == 1 {
        (coord / cell_size).floor() * cell_size + cell_size * 0.5
    } else {
        (coord / cell_size).round() * cell_size
    }
}
