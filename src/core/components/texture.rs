//=========================================================================
// Texture Component
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;

//=== Internal Modules ====================================================

use super::{Capabilities, Component, ComponentError, DrawSource, Drawable};
use crate::core::blueprint::{ComponentInitData, ComponentType};
use crate::core::math::Rect;
use crate::core::resources::{Assets, TextureHandle, TextureInfo};

//=== TextureComponent ====================================================

/// Draws a whole texture centered on the owner.
#[derive(Debug)]
pub struct TextureComponent {
    drawable: Drawable,
    texture: TextureHandle,
}

impl TextureComponent {
    /// Loads `data.path` through the shared texture cache.
    pub fn new(data: &ComponentInitData, assets: &Assets) -> Result<Self, ComponentError> {
        let texture = assets.texture(&data.path)?;
        let drawable =
            Drawable::from_data(data).with_source(DrawSource::Texture(texture.key().clone()));

        Ok(Self { drawable, texture })
    }

    pub fn texture(&self) -> &TextureInfo {
        self.texture.value()
    }

    pub fn drawable_mut(&mut self) -> &mut Drawable {
        &mut self.drawable
    }
}

impl Component for TextureComponent {
    fn kind(&self) -> ComponentType {
        ComponentType::Texture
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DRAW | Capabilities::BOUNDS
    }

    fn drawable(&self) -> Option<&Drawable> {
        Some(&self.drawable)
    }

    fn bounds(&self, origin: Vec2) -> Option<Rect> {
        let info = self.texture.value();
        Some(Rect::centered(
            origin,
            Vec2::new(info.width as f32, info.height as f32),
        ))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
