//=========================================================================
// Component Initialization Data
//
// Typed record built from one sub-block of an object's `Components`
// block. The record carries the union of fields any component kind reads;
// each constructor picks what it needs.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== External Crates =====================================================

use glam::Vec2;
use log::debug;

//=== Internal Modules ====================================================

use crate::core::parser::{Block, ParseError};

//=== ComponentType =======================================================

/// Tag selecting which component a record constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentType {
    #[default]
    Box,
    Texture,
    Tileset,
    Text,
    AnimatedTexture,
}

impl ComponentType {
    /// Every tag, in declaration order.
    pub const ALL: [ComponentType; 5] = [
        Self::Box,
        Self::Texture,
        Self::Tileset,
        Self::Text,
        Self::AnimatedTexture,
    ];

    /// Resolves a block name to a tag.
    ///
    /// Unknown names fall back to `Box`.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .unwrap_or_else(|| {
                debug!(
                    target: "blueprint",
                    "Unknown component tag `{}`, using {}",
                    tag,
                    Self::Box.tag()
                );
                Self::Box
            })
    }

    /// Block name used for this tag in scene files.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Box => "BoxComponent",
            Self::Texture => "TextureComponent",
            Self::Tileset => "TilesetComponent",
            Self::Text => "TextComponent",
            Self::AnimatedTexture => "AnimatedTextureComponent",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

//=== ComponentInitData ===================================================

/// Everything needed to construct one component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentInitData {
    pub kind: ComponentType,
    pub path: String,
    pub size: Vec2,
    pub pt_size: i32,
    pub text: String,
    pub z_index: i32,
    pub draw_debug: bool,
    pub center_origin: bool,
    pub margin: i32,
    pub spacing: i32,
}

impl ComponentInitData {
    /// Empty record of the given kind.
    pub fn new(kind: ComponentType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Reads a record from a component block.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when a numeric field is malformed.
    pub fn from_block(block: &Block) -> Result<Self, ParseError> {
        Ok(Self {
            kind: ComponentType::from_tag(block.name()),
            path: block.get_or("path", "").to_string(),
            size: block.get_vec2("size", Vec2::ZERO)?,
            pt_size: block.get_int("ptSize", 0)?,
            text: block.get_or("text", "").to_string(),
            z_index: block.get_int("z-index", 0)?,
            draw_debug: block.has("draw-debug"),
            center_origin: block.has("center-origin"),
            margin: block.get_int("margin", 0)?,
            spacing: block.get_int("spacing", 0)?,
        })
    }

    //--- Builders ---------------------------------------------------------

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>, pt_size: i32) -> Self {
        self.text = text.into();
        self.pt_size = pt_size;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::Parser;

    #[test]
    fn unknown_tag_falls_back_to_box() {
        assert_eq!(ComponentType::from_tag("Sprite"), ComponentType::Box);
        assert_eq!(
            ComponentType::from_tag("TilesetComponent"),
            ComponentType::Tileset
        );
    }

    #[test]
    fn tags_round_trip() {
        for kind in ComponentType::ALL {
            assert_eq!(ComponentType::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn reads_all_fields() {
        let parser = Parser::parse_str(
            "<TextComponent | draw-debug, center-origin>\n\
             path = fonts/mono.ttf\n\
             size = 16, 8\n\
             ptSize = 24\n\
             text = Hello = world\n\
             z-index = -3\n\
             margin = 1\n\
             spacing = 2\n\
             </TextComponent>",
        );
        let data = ComponentInitData::from_block(parser.main_block().unwrap()).unwrap();

        assert_eq!(data.kind, ComponentType::Text);
        assert_eq!(data.path, "fonts/mono.ttf");
        assert_eq!(data.size, Vec2::new(16.0, 8.0));
        assert_eq!(data.pt_size, 24);
        assert_eq!(data.text, "Hello = world");
        assert_eq!(data.z_index, -3);
        assert!(data.draw_debug && data.center_origin);
        assert_eq!((data.margin, data.spacing), (1, 2));
    }

    #[test]
    fn malformed_z_index_is_an_error() {
        let parser = Parser::parse_str("<BoxComponent>\nz-index = top\n</BoxComponent>");
        assert!(ComponentInitData::from_block(parser.main_block().unwrap()).is_err());
    }
}
