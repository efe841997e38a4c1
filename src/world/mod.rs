//! World Module
//!
//! World-space configuration: the build grid, cell indexing and snapping.

pub mod grid;

pub use grid::{Cell, GridConfig, cell_snap};
