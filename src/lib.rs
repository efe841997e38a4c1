//! Homestead Engine Library
//!
//! A grid-based building engine: continuous pointer-derived world coordinates
//! are snapped to a bounded 2D build grid, validated against stacking and
//! support rules, and committed as placed blocks through a drag session.
//!
//! # Modules
//!
//! - [`world`] - Grid configuration, cell indexing and snapping
//! - [`building`] - Blocks, height map, placement validation, drag session
//! - [`input`] - Key bindings for build controls
//!
//! # Example
//!
//! ```ignore
//! use homestead_engine::world::GridConfig;
//! use homestead_engine::building::{DragSession, PlaceableKind, PointerState};
//!
//! let mut session = DragSession::new(GridConfig::default());
//!
//! // host implements BuildHost (scene query, ground raycast, factories)
//! session.start_drag(&mut host, PlaceableKind::Wall, PointerState::new(2.3, 3.8));
//! session.update_drag(&host, PointerState::new(2.4, 3.6));
//! let event = session.finish_drag(&mut host);
//! ```

pub mod building;
pub mod input;
pub mod world;

pub use building::{
    BuildEvent, BuildHost, DragPhase, DragSession, Footprint, GameMode, HeightMap, PlaceableKind,
    PlacedBlock, PointerState, Preview, Rejection, SurfaceEntry, SurfaceType,
};
pub use building::{HEIGHT_EPSILON, can_place, covered_cells};
pub use input::BuildBindings;
pub use world::{Cell, GridConfig, cell_snap};
