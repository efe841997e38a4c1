//! Placement Tests - Snapping, Coverage and Validation
//!
//! Pure-logic tests for the grid, footprint coverage, height map and the
//! placement validator, independent of any drag session.

use glam::Vec3;
use homestead_engine::building::{
    HEIGHT_EPSILON, HeightMap, PlaceableKind, PlacedBlock, Rejection, SurfaceEntry, SurfaceType,
    can_place, covered_cells,
};
use homestead_engine::world::{Cell, GridConfig, cell_snap};

// ============================================================================
// Snapping
// ============================================================================

#[test]
fn test_odd_snap_returns_cell_centers() {
    let cell_size = 1.0;
    for coord in [-4.8_f32, -1.2, 0.0, 0.49, 2.3, 7.9] {
        let snapped = cell_snap(coord, 1, cell_size);
        // k * cell_size + cell_size / 2 for integer k
        let k = (snapped - cell_size / 2.0) / cell_size;
        assert!((k - k.round()).abs() < 1e-5, "coord {coord} snapped to {snapped}");
    }
}

#[test]
fn test_even_snap_returns_cell_multiples() {
    let cell_size = 0.5;
    for coord in [-4.8_f32, -1.2, 0.0, 0.49, 2.3, 7.9] {
        let snapped = cell_snap(coord, 2, cell_size);
        let k = snapped / cell_size;
        assert!((k - k.round()).abs() < 1e-5, "coord {coord} snapped to {snapped}");
    }
}

#[test]
fn test_snap_is_idempotent_for_both_parities() {
    let cell_size = 2.5;
    for coord in [-9.9_f32, -0.3, 0.0, 1.1, 6.6] {
        for span in [1, 2, 3, 4] {
            let once = cell_snap(coord, span, cell_size);
            assert_eq!(cell_snap(once, span, cell_size), once);
        }
    }
}

#[test]
fn test_grid_snap_matches_free_function() {
    let grid = GridConfig::new(40.0, 16); // cell size 2.5
    assert_eq!(grid.snap(3.1, 1), cell_snap(3.1, 1, 2.5));
    assert_eq!(grid.snap(3.1, 2), cell_snap(3.1, 2, 2.5));
}

// ============================================================================
// Footprint coverage
// ============================================================================

#[test]
fn test_wall_covers_its_anchor() {
    let cells = covered_cells(Cell::new(-3, 4), PlaceableKind::Wall.footprint());
    assert_eq!(cells, vec![Cell::new(-3, 4)]);
}

#[test]
fn test_house_straddles_its_anchor() {
    let house = PlaceableKind::House { height: 4.0 };
    let cells = covered_cells(Cell::new(0, 0), house.footprint());
    assert_eq!(cells.len(), 4);
    assert!(cells.contains(&Cell::new(-1, -1)));
    assert!(cells.contains(&Cell::new(-1, 0)));
    assert!(cells.contains(&Cell::new(0, -1)));
    assert!(cells.contains(&Cell::new(0, 0)));
}

#[test]
fn test_snapped_house_lands_on_its_covered_cells() {
    // A house snapped to the intersection at (2, 2) anchors at cell (2, 2)
    // and covers cells (1..=2, 1..=2).
    let grid = GridConfig::default();
    let house = PlaceableKind::House { height: 4.0 };
    let snapped_x = grid.snap(1.7, house.footprint().sx);
    let snapped_z = grid.snap(2.4, house.footprint().sz);
    assert_eq!((snapped_x, snapped_z), (2.0, 2.0));

    let anchor = grid.cell_at(snapped_x, snapped_z);
    let cells = covered_cells(anchor, house.footprint());
    assert!(cells.contains(&Cell::new(1, 1)));
    assert!(cells.contains(&Cell::new(2, 2)));
}

// ============================================================================
// Validator
// ============================================================================

#[test]
fn test_empty_map_in_bounds_wall_validates_at_zero() {
    let map = HeightMap::new();
    let cells = covered_cells(Cell::new(0, 0), PlaceableKind::Wall.footprint());
    assert_eq!(can_place(&cells, &PlaceableKind::Wall, &map, 5), Ok(0.0));
}

#[test]
fn test_any_house_cell_rejects_regardless_of_others() {
    let mut map = HeightMap::new();
    map.set(
        Cell::new(0, 0),
        SurfaceEntry {
            top: SurfaceType::House,
            height: 4.0,
        },
    );

    for kind in [
        PlaceableKind::Wall,
        PlaceableKind::StrongBlock,
        PlaceableKind::House { height: 2.0 },
    ] {
        let cells = covered_cells(Cell::new(0, 0), kind.footprint());
        assert!(
            matches!(can_place(&cells, &kind, &map, 5), Err(Rejection::OnHouse { .. })),
            "kind {kind:?} should reject on a house cell"
        );
    }
}

#[test]
fn test_epsilon_boundary() {
    let house = PlaceableKind::House { height: 4.0 };
    let cells = covered_cells(Cell::new(0, 0), house.footprint());

    // Exactly at the epsilon: accepted
    let mut map = HeightMap::new();
    for cell in &cells {
        map.set(
            *cell,
            SurfaceEntry {
                top: SurfaceType::Wall,
                height: 1.0,
            },
        );
    }
    map.set(
        Cell::new(0, 0),
        SurfaceEntry {
            top: SurfaceType::Wall,
            height: 1.0 + HEIGHT_EPSILON,
        },
    );
    let base = can_place(&cells, &house, &map, 5).unwrap();
    assert!((base - 1.0).abs() <= HEIGHT_EPSILON);

    // Just past the epsilon: rejected
    map.set(
        Cell::new(0, 0),
        SurfaceEntry {
            top: SurfaceType::Wall,
            height: 1.02,
        },
    );
    assert!(matches!(
        can_place(&cells, &house, &map, 5),
        Err(Rejection::Uneven { .. })
    ));
}

#[test]
fn test_house_rests_on_walls_and_strong_blocks() {
    let house = PlaceableKind::House { height: 4.0 };
    let cells = covered_cells(Cell::new(0, 0), house.footprint());

    let mut map = HeightMap::new();
    for (i, cell) in cells.iter().enumerate() {
        let top = if i % 2 == 0 {
            SurfaceType::Wall
        } else {
            SurfaceType::Strong
        };
        map.set(*cell, SurfaceEntry { top, height: 1.0 });
    }

    assert_eq!(can_place(&cells, &house, &map, 5), Ok(1.0));
}

#[test]
fn test_validator_is_deterministic() {
    // Same inputs, same verdict across repeated calls
    let mut map = HeightMap::new();
    map.set(
        Cell::new(2, 3),
        SurfaceEntry {
            top: SurfaceType::Wall,
            height: 1.0,
        },
    );
    let cells = covered_cells(Cell::new(2, 3), PlaceableKind::Wall.footprint());

    let verdicts: Vec<_> = (0..10)
        .map(|_| can_place(&cells, &PlaceableKind::Wall, &map, 5))
        .collect();
    assert!(verdicts.iter().all(|v| *v == Ok(1.0)));
}

// ============================================================================
// Height map projection
// ============================================================================

#[test]
fn test_height_map_matches_placed_set() {
    let mut map = HeightMap::new();
    let blocks = vec![
        PlacedBlock::new(PlaceableKind::Wall, Vec3::new(2.5, 0.5, 3.5)),
        PlacedBlock::new(PlaceableKind::StrongBlock, Vec3::new(-1.5, 0.5, -1.5)),
        PlacedBlock::new(PlaceableKind::House { height: 4.0 }, Vec3::new(-2.0, 2.0, 2.0)),
    ];

    map.rebuild(&blocks, 1.0);

    // 1 + 1 + 4 covered cells
    assert_eq!(map.len(), 6);
    assert_eq!(map.surface_at(Cell::new(2, 3)).top, SurfaceType::Wall);
    assert_eq!(map.surface_at(Cell::new(-2, -2)).top, SurfaceType::Strong);
    assert_eq!(map.surface_at(Cell::new(-3, 1)).top, SurfaceType::House);
    assert_eq!(map.surface_at(Cell::new(-2, 2)).top, SurfaceType::House);
}

#[test]
fn test_stacked_wall_reports_summed_height() {
    // A wall resting on a wall tops out at 2.0
    let mut map = HeightMap::new();
    let blocks = vec![
        PlacedBlock::new(PlaceableKind::Wall, Vec3::new(0.5, 0.5, 0.5)),
        PlacedBlock::new(PlaceableKind::Wall, Vec3::new(0.5, 1.5, 0.5)),
    ];

    map.rebuild(&blocks, 1.0);

    let surface = map.surface_at(Cell::new(0, 0));
    assert_eq!(surface.top, SurfaceType::Wall);
    assert_eq!(surface.height, 2.0);
}
