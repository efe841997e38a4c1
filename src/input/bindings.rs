//! Build Key Bindings
//!
//! Defines build-mode key bindings as a data structure instead of hardcoded
//! key matches, enabling future remapping and centralizing input
//! documentation.

use winit::keyboard::KeyCode;

/// Build-mode key bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildBindings {
    /// Rotate the preview 90° about the vertical axis
    pub rotate: KeyCode,
}

impl Default for BuildBindings {
    fn default() -> Self {
        Self {
            rotate: KeyCode::Space,
        }
    }
}

impl BuildBindings {
    /// Does this key rotate the preview?
    pub fn is_rotate(&self, key: KeyCode) -> bool {
        key == self.rotate
    }
}
