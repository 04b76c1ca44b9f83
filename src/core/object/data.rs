//=========================================================================
// Object Attributes
//
// Plain attribute record shared by blueprints and live objects.
//
// Reserved block entries:
// ```text
// position = x, y        parent-relative, default (0, 0)
// size     = w, h        parent-relative, default (1, 1)
// | not-visible          visible = false
// | screen-position      screen_position = true
// | draw-debug           draw_debug = true
// | layer-world          adds Layers::WORLD (already the default)
// | layer-ui             adds Layers::UI
// ```
//
//=========================================================================

//=== External Crates =====================================================

use bitflags::bitflags;
use glam::Vec2;

//=== Internal Modules ====================================================

use crate::core::parser::{Block, ParseError};

//=== Layers ==============================================================

bitflags! {
    /// Logical layers an object belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Layers: u32 {
        const WORLD = 1 << 0;
        const UI    = 1 << 1;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::WORLD
    }
}

//=== ObjectData ==========================================================

/// Attributes of an object, before or after instantiation.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectData {
    pub name: String,
    pub position: Vec2,
    pub size: Vec2,
    pub visible: bool,
    pub screen_position: bool,
    pub draw_debug: bool,
    pub layers: Layers,
}

impl ObjectData {
    /// Minimal attributes for a bare object.
    pub fn new(name: impl Into<String>, position: Vec2) -> Self {
        Self {
            name: name.into(),
            position,
            ..Self::default()
        }
    }

    /// Reads attributes from an object block.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `position` or `size` is malformed.
    pub fn from_block(block: &Block) -> Result<Self, ParseError> {
        let mut layers = Layers::default();
        if block.has("layer-world") {
            layers |= Layers::WORLD;
        }
        if block.has("layer-ui") {
            layers |= Layers::UI;
        }

        Ok(Self {
            name: block.name().to_string(),
            position: block.get_vec2("position", Vec2::ZERO)?,
            size: block.get_vec2("size", Vec2::ONE)?,
            visible: !block.has("not-visible"),
            screen_position: block.has("screen-position"),
            draw_debug: block.has("draw-debug"),
            layers,
        })
    }

    /// Returns `true` if at least one layer is shared with `layers`.
    pub fn matches_layers(&self, layers: Layers) -> bool {
        self.layers.intersects(layers)
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for ObjectData {
    fn default() -> Self {
        Self {
            name: "Object".to_string(),
            position: Vec2::ZERO,
            size: Vec2::ONE,
            visible: true,
            screen_position: false,
            draw_debug: false,
            layers: Layers::default(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
