//=========================================================================
// Components
//
// Capability units attached to objects, and the dispatch that turns a
// `ComponentInitData` record into one of them.
//
// ```text
// Tag                        Capabilities
// BoxComponent               BOUNDS
// TextureComponent           DRAW | BOUNDS
// TilesetComponent           DRAW | BOUNDS
// TextComponent              DRAW
// AnimatedTextureComponent   DRAW | UPDATE
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod animated_texture;
mod animation;
mod box_component;
mod component;
mod drawable;
mod error;
mod text;
mod texture;
mod tileset;

//=== Public API ==========================================================

pub use animated_texture::{AnimatedTextureComponent, ANIMATION_EXTENSION};
pub use animation::{Animation, AnimationSet, Progression};
pub use box_component::BoxComponent;
pub use component::{Capabilities, Component};
pub use drawable::{DrawSource, Drawable, Flip};
pub use error::ComponentError;
pub use text::TextComponent;
pub use texture::TextureComponent;
pub use tileset::TilesetComponent;

//=== Internal Modules ====================================================

use crate::core::blueprint::{ComponentInitData, ComponentType};
use crate::core::resources::Assets;

//=== Construction ========================================================

/// Constructs the component selected by `data.kind`.
///
/// # Errors
///
/// Propagates resource and animation-file failures from the selected
/// constructor.
pub fn construct(
    data: &ComponentInitData,
    assets: &Assets,
) -> Result<Box<dyn Component>, ComponentError> {
    let component: Box<dyn Component> = match data.kind {
        ComponentType::Box => Box::new(BoxComponent::new(data)),
        ComponentType::Texture => Box::new(TextureComponent::new(data, assets)?),
        ComponentType::Tileset => Box::new(TilesetComponent::new(data, assets)?),
        ComponentType::Text => Box::new(TextComponent::new(data, assets)?),
        ComponentType::AnimatedTexture => Box::new(AnimatedTextureComponent::new(data, assets)?),
    };
    Ok(component)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::{MemoryLoader, ResourceRoot};

    #[test]
    fn dispatches_on_kind() {
        let loader = MemoryLoader::new()
            .with_texture("res/a.png", 8, 8)
            .with_font("res/f.ttf");
        let assets = Assets::new(ResourceRoot::new("res"), Box::new(loader));

        let cases = [
            ComponentInitData::new(ComponentType::Box),
            ComponentInitData::new(ComponentType::Texture).with_path("a.png"),
            ComponentInitData::new(ComponentType::Text)
                .with_path("f.ttf")
                .with_text("hi", 10),
        ];

        for data in &cases {
            let component = construct(data, &assets).unwrap();
            assert_eq!(component.kind(), data.kind);
        }
    }

    #[test]
    fn propagates_constructor_errors() {
        let assets = Assets::new(ResourceRoot::new("res"), Box::new(MemoryLoader::new()));
        let data = ComponentInitData::new(ComponentType::Texture).with_path("nope.png");
        assert!(construct(&data, &assets).is_err());
    }
}
