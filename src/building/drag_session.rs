//! Drag Session - preview-then-commit block placement
//!
//! One complete drag interaction: start creates a translucent preview and
//! freezes the height map, pointer moves drive snap + validation + visual
//! feedback, release commits through the host factory or cancels. Every
//! terminal transition returns to Idle, drops the preview and re-enables
//! the camera, whichever way the drag ends.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Vec2, Vec3};
use winit::keyboard::KeyCode;

use super::blocks::{INVALID_COLOR, PlaceableKind};
use super::height_map::HeightMap;
use super::host::{BuildHost, GameMode, PointerState};
use super::placement::{can_place, covered_cells};
use crate::input::BuildBindings;
use crate::world::GridConfig;

/// Phase of the drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag in progress
    Idle,
    /// Preview live, pointer events drive it
    Dragging,
}

/// The transient, uncommitted stand-in for a pending placement.
#[derive(Clone, Copy, Debug)]
pub struct Preview {
    pub kind: PlaceableKind,
    /// World-space center position
    pub position: Vec3,
    /// Rotation about the vertical axis (radians)
    pub rotation_y: f32,
    /// Category color when valid, red when not
    pub color: [f32; 3],
    /// Whether the current position passed validation
    pub valid: bool,
}

impl Preview {
    fn new(kind: PlaceableKind) -> Self {
        Self {
            kind,
            position: Vec3::new(0.0, kind.height() * 0.5, 0.0),
            rotation_y: 0.0,
            color: INVALID_COLOR,
            valid: false,
        }
    }
}

/// Events emitted by the drag session for the host/UI to react to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BuildEvent {
    /// Preview moved or changed validity
    PreviewChanged { position: Vec3, valid: bool },
    /// A block was committed to the scene
    Placed { kind: PlaceableKind, position: Vec3 },
    /// Drag ended without placing anything
    Canceled,
}

/// Drag session state machine.
///
/// At most one drag is active per session value; `start_drag` while dragging
/// is ignored. The height map is rebuilt at session start and after each
/// successful commit, and is otherwise a read-only snapshot: placements made
/// by other actors mid-drag become visible at the next rebuild.
#[derive(Clone, Debug)]
pub struct DragSession {
    grid: GridConfig,
    bindings: BuildBindings,
    phase: DragPhase,
    height_map: HeightMap,
    preview: Option<Preview>,
    /// Snapped XZ of the last pointer hit, used at commit time
    last_snapped: Vec2,
    /// Last pointer seen while dragging, replayed after a rotation
    last_pointer: Option<PointerState>,
}

impl DragSession {
    pub fn new(grid: GridConfig) -> Self {
        Self::with_bindings(grid, BuildBindings::default())
    }

    pub fn with_bindings(grid: GridConfig, bindings: BuildBindings) -> Self {
        Self {
            grid,
            bindings,
            phase: DragPhase::Idle,
            height_map: HeightMap::new(),
            preview: None,
            last_snapped: Vec2::ZERO,
            last_pointer: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Is a drag in progress? Hosts route pointer/key events to the session
    /// only while this is true.
    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn height_map(&self) -> &HeightMap {
        &self.height_map
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Rebuild the height map from the host's current placed blocks.
    ///
    /// Called internally at session boundaries; exposed so hosts can resync
    /// after out-of-band scene mutation.
    pub fn rebuild_height_map(&mut self, host: &impl BuildHost) {
        self.height_map
            .rebuild(&host.placed_blocks(), self.grid.cell_size());
    }

    /// Begin a drag for `kind` at the origin pointer position.
    ///
    /// Ignored (returns `None`) unless the session is idle and the host is
    /// in building mode. On entry the height map is rebuilt, the preview is
    /// created, camera controls are disabled and one update runs with the
    /// origin pointer.
    pub fn start_drag(
        &mut self,
        host: &mut impl BuildHost,
        kind: PlaceableKind,
        pointer: PointerState,
    ) -> Option<BuildEvent> {
        if self.phase == DragPhase::Dragging || host.game_mode() != GameMode::Building {
            return None;
        }

        self.rebuild_height_map(host);
        self.preview = Some(Preview::new(kind));
        self.phase = DragPhase::Dragging;
        host.set_camera_enabled(false);
        println!("[Build] Drag started: {}", kind.name());

        self.update_drag(host, pointer).or_else(|| {
            // Pointer missed the ground on the first frame; the preview
            // exists but has not been positioned yet.
            self.preview.map(|p| BuildEvent::PreviewChanged {
                position: p.position,
                valid: p.valid,
            })
        })
    }

    /// Move the preview to follow the pointer.
    ///
    /// No-op without a live preview; a missed raycast skips the frame and
    /// the preview keeps its last transform. Otherwise the hit is snapped
    /// per footprint parity, validated, and the preview recolored and
    /// repositioned: valid placements rest on their support, invalid ones
    /// sit at grid height in the reject color.
    pub fn update_drag(
        &mut self,
        host: &impl BuildHost,
        pointer: PointerState,
    ) -> Option<BuildEvent> {
        self.preview.as_ref()?;
        self.last_pointer = Some(pointer);
        let hit = host.raycast_ground(pointer)?;

        let preview = self.preview.as_mut()?;
        let footprint = preview.kind.footprint();
        let snapped_x = self.grid.snap(hit.x, footprint.sx);
        let snapped_z = self.grid.snap(hit.z, footprint.sz);
        self.last_snapped = Vec2::new(snapped_x, snapped_z);

        let anchor = self.grid.cell_at(snapped_x, snapped_z);
        let cells = covered_cells(anchor, footprint);
        let half_height = preview.kind.height() * 0.5;

        match can_place(&cells, &preview.kind, &self.height_map, self.grid.half_cells()) {
            Ok(base) => {
                preview.valid = true;
                preview.color = preview.kind.color();
                preview.position = Vec3::new(snapped_x, base + half_height, snapped_z);
            }
            Err(_) => {
                preview.valid = false;
                preview.color = INVALID_COLOR;
                // Rest on the grid plane while invalid; stacking is ignored
                preview.position = Vec3::new(snapped_x, half_height, snapped_z);
            }
        }

        Some(BuildEvent::PreviewChanged {
            position: preview.position,
            valid: preview.valid,
        })
    }

    /// Handle a key press during a drag.
    ///
    /// Only the bound rotate key does anything: the preview turns 90° about
    /// the vertical axis and the last pointer is replayed so snap and
    /// validity reflect the new orientation.
    pub fn handle_key(&mut self, host: &impl BuildHost, key: KeyCode) -> Option<BuildEvent> {
        if !self.bindings.is_rotate(key) {
            return None;
        }
        let preview = self.preview.as_mut()?;
        preview.rotation_y = (preview.rotation_y + FRAC_PI_2).rem_euclid(TAU);

        match self.last_pointer {
            Some(pointer) => self.update_drag(host, pointer),
            None => self.preview.map(|p| BuildEvent::PreviewChanged {
                position: p.position,
                valid: p.valid,
            }),
        }
    }

    /// End the drag: commit if the last snapped position validates, cancel
    /// otherwise.
    ///
    /// Validity is recomputed from the cached snapped position, so a release
    /// over an invalid spot is handled identically to a deliberate cancel.
    /// On every path the preview is dropped, the camera re-enabled and the
    /// phase reset to Idle.
    pub fn finish_drag(&mut self, host: &mut impl BuildHost) -> BuildEvent {
        let event = match self.preview.take() {
            None => BuildEvent::Canceled,
            Some(preview) => {
                let footprint = preview.kind.footprint();
                let anchor = self.grid.cell_at(self.last_snapped.x, self.last_snapped.y);
                let cells = covered_cells(anchor, footprint);

                match can_place(&cells, &preview.kind, &self.height_map, self.grid.half_cells()) {
                    Ok(base) => {
                        let position = Vec3::new(
                            self.last_snapped.x,
                            base + preview.kind.height() * 0.5,
                            self.last_snapped.y,
                        );
                        host.spawn_block(
                            preview.kind,
                            position,
                            self.grid.cell_size(),
                            preview.rotation_y,
                        );
                        self.rebuild_height_map(host);
                        println!(
                            "[Build] Placed {} at ({:.1}, {:.1}, {:.1})",
                            preview.kind.name(),
                            position.x,
                            position.y,
                            position.z
                        );
                        BuildEvent::Placed {
                            kind: preview.kind,
                            position,
                        }
                    }
                    Err(_) => {
                        println!("[Build] Canceled {}", preview.kind.name());
                        BuildEvent::Canceled
                    }
                }
            }
        };

        host.set_camera_enabled(true);
        self.phase = DragPhase::Idle;
        self.last_pointer = None;
        event
    }
}
