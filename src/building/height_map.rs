//! Height Map
//!
//! A derived snapshot mapping each occupied grid cell to its top surface
//! type and height. The map is a pure projection of the currently placed
//! blocks: it is rebuilt whole at session boundaries, never mutated
//! incrementally. Placed blocks never overlap (the validator enforces this
//! at commit time), so rebuild order never produces write conflicts.

use std::collections::HashMap;

use super::blocks::{PlacedBlock, SurfaceType};
use super::placement::covered_cells;
use crate::world::Cell;

/// Top surface of one occupied cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceEntry {
    /// What the top of the stack is made of
    pub top: SurfaceType,
    /// World-space height of the top surface
    pub height: f32,
}

impl SurfaceEntry {
    /// The implicit surface of a cell with no entry: bare ground at height 0.
    pub const GROUND: SurfaceEntry = SurfaceEntry {
        top: SurfaceType::Ground,
        height: 0.0,
    };
}

/// Per-cell top surface snapshot, rebuilt from the placed block set.
#[derive(Clone, Debug, Default)]
pub struct HeightMap {
    entries: HashMap<Cell, SurfaceEntry>,
}

impl HeightMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the snapshot from the current placed block set.
    ///
    /// Each block's anchor cell is derived from its world XZ position, its
    /// covered cells from its footprint, and its top height from its center
    /// and vertical extent. Idempotent given the same block set.
    pub fn rebuild(&mut self, blocks: &[PlacedBlock], cell_size: f32) {
        self.entries.clear();

        for block in blocks {
            let anchor = Cell::new(
                (block.position.x / cell_size).floor() as i32,
                (block.position.z / cell_size).floor() as i32,
            );
            let entry = SurfaceEntry {
                top: block.kind.surface(),
                height: block.top_height(),
            };
            for cell in covered_cells(anchor, block.kind.footprint()) {
                self.entries.insert(cell, entry);
            }
        }
    }

    /// Surface at a cell; cells without an entry are bare ground at height 0.
    pub fn surface_at(&self, cell: Cell) -> SurfaceEntry {
        self.entries.get(&cell).copied().unwrap_or(SurfaceEntry::GROUND)
    }

    /// Directly record a surface entry. Used to seed maps in tests and by
    /// hosts that synthesize terrain.
    pub fn set(&mut self, cell: Cell, entry: SurfaceEntry) {
        self.entries.insert(cell, entry);
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
