//! Build Host
//!
//! The seam between the placement engine and its surroundings. Rendering,
//! camera control, picking and mesh construction all live behind this trait;
//! the engine only ever sees placed-block records, an optional ground hit,
//! and the current game mode.

use glam::Vec3;

use super::blocks::{PlaceableKind, PlacedBlock};

/// High-level game mode. Dragging is only allowed while building.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Walking around; build input is ignored
    Roaming,
    /// Build mode; drag sessions may start
    Building,
}

/// A pointer position in screen coordinates, as delivered by the windowing
/// layer. The engine never interprets these directly; they are handed back
/// to the host for ground picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Collaborators the drag session consumes.
///
/// Implemented by the scene/application layer that owns the actual meshes,
/// camera and window.
pub trait BuildHost {
    /// Snapshot of every placed block currently in the scene.
    fn placed_blocks(&self) -> Vec<PlacedBlock>;

    /// Cast the pointer against the ground plane. `None` means the pointer
    /// missed this frame; the session keeps its last transform.
    fn raycast_ground(&self, pointer: PointerState) -> Option<Vec3>;

    /// Current game mode.
    fn game_mode(&self) -> GameMode;

    /// Enable or disable camera controls. Disabled for the lifetime of a
    /// drag so orbiting does not fight the pointer.
    fn set_camera_enabled(&mut self, enabled: bool);

    /// Construct the real placed object. `position` is the block center
    /// (support height plus half the vertical extent); `rotation_y` is
    /// copied from the preview.
    fn spawn_block(&mut self, kind: PlaceableKind, position: Vec3, cell_size: f32, rotation_y: f32);
}
