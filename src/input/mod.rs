//! Input Module
//!
//! Key bindings for build controls, defined as data so they can be remapped.

pub mod bindings;

pub use bindings::BuildBindings;
