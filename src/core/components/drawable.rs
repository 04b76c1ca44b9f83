//=========================================================================
// Draw Contract
//
// What an external drawing pass needs from a drawable component: a
// z-order key, where the pixels come from, which part of them to use and
// how to flip them. The renderer owns GPU textures; `DrawSource` is the
// key it looks them up by.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== Internal Modules ====================================================

use crate::core::blueprint::ComponentInitData;
use crate::core::math::Rect;

//=== Flip ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
}

//=== DrawSource ==========================================================

/// Key identifying the pixels a drawable shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DrawSource {
    /// An image file, resolved against the resource root.
    Texture(PathBuf),

    /// Text rendered with a font at a point size.
    Text {
        font: PathBuf,
        pt_size: i32,
        text: String,
    },
}

//=== Drawable ============================================================

/// Draw record owned by a drawable component.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub z_index: i32,
    pub center_origin: bool,
    pub flip: Flip,
    pub source: Option<DrawSource>,

    /// Portion of the source to draw; `None` draws the full texture.
    pub region: Option<Rect>,
}

impl Drawable {
    pub fn from_data(data: &ComponentInitData) -> Self {
        Self {
            z_index: data.z_index,
            center_origin: data.center_origin,
            flip: Flip::None,
            source: None,
            region: None,
        }
    }

    pub fn with_source(mut self, source: DrawSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn is_full_texture(&self) -> bool {
        self.region.is_none()
    }
}
