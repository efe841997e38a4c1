//! Building Module
//!
//! Everything between a pointer position and a committed block: placeable
//! kinds and their footprints, the derived height map, placement validation,
//! and the drag session state machine that ties them together.

pub mod blocks;
pub mod drag_session;
pub mod height_map;
pub mod host;
pub mod placement;

pub use blocks::{Footprint, PlaceableKind, PlacedBlock, SurfaceType};
pub use drag_session::{BuildEvent, DragPhase, DragSession, Preview};
pub use height_map::{HeightMap, SurfaceEntry};
pub use host::{BuildHost, GameMode, PointerState};
pub use placement::{HEIGHT_EPSILON, Rejection, can_place, covered_cells};
