//! Building Blocks
//!
//! The closed set of placeable kinds, their footprints and heights, the
//! surface types they leave on the height map, and the placed-block record
//! the scene hands back for height map rebuilds.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Preview/material color for walls (green).
pub const WALL_COLOR: [f32; 3] = [0.29, 0.69, 0.31];
/// Preview/material color for strong blocks (orange).
pub const STRONG_COLOR: [f32; 3] = [1.0, 0.65, 0.0];
/// Preview/material color for houses (blue).
pub const HOUSE_COLOR: [f32; 3] = [0.13, 0.59, 0.95];
/// Preview color for an invalid placement (red).
pub const INVALID_COLOR: [f32; 3] = [1.0, 0.27, 0.27];

/// Cell spans of an object along each grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Span in cells along X
    pub sx: i32,
    /// Span in cells along Z
    pub sz: i32,
}

impl Footprint {
    pub const fn new(sx: i32, sz: i32) -> Self {
        Self { sx, sz }
    }

    /// Number of cells covered.
    pub const fn area(&self) -> i32 {
        self.sx * self.sz
    }
}

/// Top surface type recorded per occupied cell.
///
/// `Ground` is the implicit default for any cell without an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    Ground,
    Wall,
    Strong,
    House,
}

impl SurfaceType {
    /// Whether a house may rest on this surface. Nothing is ever built on
    /// top of a house.
    pub const fn supports_house(self) -> bool {
        match self {
            SurfaceType::Ground | SurfaceType::Wall | SurfaceType::Strong => true,
            SurfaceType::House => false,
        }
    }
}

/// A kind of block the player can place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlaceableKind {
    /// 1x1 stackable wall segment
    Wall,
    /// 1x1 reinforced block
    StrongBlock,
    /// 2x2 house with a fixed vertical extent; terminal - nothing stacks on it
    House { height: f32 },
}

impl PlaceableKind {
    /// Parse a type descriptor: `"wall"`, `"strong"` or `"house_h<N>"` with
    /// N a positive integer height. Unknown descriptors degrade to a default
    /// 1x1 wall with a reported warning.
    pub fn parse(descriptor: &str) -> Self {
        match descriptor {
            "wall" => PlaceableKind::Wall,
            "strong" => PlaceableKind::StrongBlock,
            _ => {
                if let Some(raw) = descriptor.strip_prefix("house_h") {
                    if let Ok(h) = raw.parse::<u32>() {
                        if h > 0 {
                            return PlaceableKind::House { height: h as f32 };
                        }
                    }
                }
                println!("[Build] Unknown placeable type '{descriptor}', defaulting to 1x1 wall");
                PlaceableKind::Wall
            }
        }
    }

    /// Cell footprint of this kind.
    pub const fn footprint(&self) -> Footprint {
        match self {
            PlaceableKind::Wall | PlaceableKind::StrongBlock => Footprint::new(1, 1),
            PlaceableKind::House { .. } => Footprint::new(2, 2),
        }
    }

    /// Vertical extent in world units.
    pub const fn height(&self) -> f32 {
        match self {
            PlaceableKind::Wall | PlaceableKind::StrongBlock => 1.0,
            PlaceableKind::House { height } => *height,
        }
    }

    /// Surface type this block leaves on the cells it covers.
    pub const fn surface(&self) -> SurfaceType {
        match self {
            PlaceableKind::Wall => SurfaceType::Wall,
            PlaceableKind::StrongBlock => SurfaceType::Strong,
            PlaceableKind::House { .. } => SurfaceType::House,
        }
    }

    /// Category color, used for the preview when the placement is valid.
    pub const fn color(&self) -> [f32; 3] {
        match self {
            PlaceableKind::Wall => WALL_COLOR,
            PlaceableKind::StrongBlock => STRONG_COLOR,
            PlaceableKind::House { .. } => HOUSE_COLOR,
        }
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            PlaceableKind::Wall => "wall",
            PlaceableKind::StrongBlock => "strong block",
            PlaceableKind::House { .. } => "house",
        }
    }
}

/// A committed block in the scene.
///
/// `position` is the block's center; the top surface sits at
/// `position.y + height / 2`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub kind: PlaceableKind,
    /// World-space center position
    pub position: Vec3,
    /// Rotation about the vertical axis (radians)
    pub rotation_y: f32,
}

impl PlacedBlock {
    pub fn new(kind: PlaceableKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            rotation_y: 0.0,
        }
    }

    /// World-space height of the block's top surface.
    pub fn top_height(&self) -> f32 {
        self.position.y + self.kind.height() * 0.5
    }
}
