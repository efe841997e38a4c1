//! Placement Validation
//!
//! Footprint coverage and the pure placement rule check. `can_place` is
//! total over its inputs: every outcome is a returned value, never a panic.

use static_assertions::const_assert;

use super::blocks::{Footprint, PlaceableKind, SurfaceType};
use super::height_map::HeightMap;
use crate::world::Cell;

/// Maximum height difference tolerated across one footprint. A placement
/// may never straddle a height discontinuity larger than this.
pub const HEIGHT_EPSILON: f32 = 0.01;

const_assert!(HEIGHT_EPSILON > 0.0);

/// Why a candidate placement was refused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rejection {
    /// A covered cell lies outside the build grid
    OutOfBounds { cell: Cell },
    /// A covered cell is already topped by a house
    OnHouse { cell: Cell },
    /// Two covered cells disagree on support height beyond the epsilon
    Uneven { cell: Cell, base: f32, found: f32 },
    /// A house placement over a surface that cannot carry one
    FragileSupport { cell: Cell, surface: SurfaceType },
}

/// Cells covered by a footprint anchored at `anchor`.
///
/// Odd spans center on the anchor cell; even spans straddle the anchor
/// symmetrically (start = anchor - span / 2). Cells are returned row-major.
pub fn covered_cells(anchor: Cell, footprint: Footprint) -> Vec<Cell> {
    let start_x = anchor.ix - footprint.sx / 2;
    let start_z = anchor.iz - footprint.sz / 2;

    let mut cells = Vec::with_capacity(footprint.area() as usize);
    for dx in 0..footprint.sx {
        for dz in 0..footprint.sz {
            cells.push(Cell::new(start_x + dx, start_z + dz));
        }
    }
    cells
}

/// Validate a candidate placement against the height map.
///
/// Returns the common support height the object would rest on, or the first
/// rule violation found:
/// - every covered cell must lie inside `[-half_cells, half_cells)`;
/// - no covered cell may be topped by a house;
/// - all covered cells must agree on support height within
///   [`HEIGHT_EPSILON`];
/// - a house needs every support surface to be ground, wall or strong.
pub fn can_place(
    cells: &[Cell],
    kind: &PlaceableKind,
    height_map: &HeightMap,
    half_cells: i32,
) -> Result<f32, Rejection> {
    let mut base_height: Option<f32> = None;
    let is_house = matches!(kind, PlaceableKind::House { .. });

    for &cell in cells {
        if !cell.in_bounds(half_cells) {
            return Err(Rejection::OutOfBounds { cell });
        }

        let surface = height_map.surface_at(cell);

        // Building on top of a house, or intersecting one, is never valid.
        if surface.top == SurfaceType::House {
            return Err(Rejection::OnHouse { cell });
        }

        match base_height {
            None => base_height = Some(surface.height),
            Some(base) => {
                if (surface.height - base).abs() > HEIGHT_EPSILON {
                    return Err(Rejection::Uneven {
                        cell,
                        base,
                        found: surface.height,
                    });
                }
            }
        }

        if is_house && !surface.top.supports_house() {
            return Err(Rejection::FragileSupport {
                cell,
                surface: surface.top,
            });
        }
    }

    Ok(base_height.unwrap_or(0.0))
}
