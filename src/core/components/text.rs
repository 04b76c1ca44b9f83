//=========================================================================
// Text Component
//=========================================================================

//=== Internal Modules ====================================================

use super::{Capabilities, Component, ComponentError, DrawSource, Drawable};
use crate::core::blueprint::{ComponentInitData, ComponentType};
use crate::core::resources::{Assets, FontInfo};

//=== TextComponent =======================================================

/// Draws a line of text with a font loaded at a point size.
///
/// The draw key is rebuilt from the current text and font in
/// [`prepare_draw`](Component::prepare_draw), so edits show up on the next
/// draw list.
#[derive(Debug)]
pub struct TextComponent {
    drawable: Drawable,
    text: String,
    font_path: String,
    font: FontInfo,
}

impl TextComponent {
    /// Opens the font named by `data.path` at `data.pt_size`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Resource`] if the font is missing or the
    /// point size is not positive.
    pub fn new(data: &ComponentInitData, assets: &Assets) -> Result<Self, ComponentError> {
        let font = assets.font(&data.path, data.pt_size)?;

        let mut component = Self {
            drawable: Drawable::from_data(data),
            text: data.text.clone(),
            font_path: data.path.clone(),
            font,
        };
        component.prepare_draw();
        Ok(component)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn pt_size(&self) -> i32 {
        self.font.pt_size
    }

    /// Resource-relative path of the font.
    pub fn font_path(&self) -> &str {
        &self.font_path
    }

    /// Reopens the font at a new point size.
    ///
    /// On failure the previous font stays in use. Behaviors go through
    /// `Runtime::set_text_font_size`, which holds the assets.
    pub fn set_font_size(&mut self, pt_size: i32, assets: &Assets) -> Result<(), ComponentError> {
        self.set_font(assets.font(&self.font_path, pt_size)?);
        Ok(())
    }

    pub(crate) fn set_font(&mut self, font: FontInfo) {
        self.font = font;
    }
}

impl Component for TextComponent {
    fn kind(&self) -> ComponentType {
        ComponentType::Text
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DRAW
    }

    fn drawable(&self) -> Option<&Drawable> {
        Some(&self.drawable)
    }

    fn prepare_draw(&mut self) {
        self.drawable.source = Some(DrawSource::Text {
            font: self.font.path.clone(),
            pt_size: self.font.pt_size,
            text: self.text.clone(),
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::{MemoryLoader, ResourceRoot};

    fn assets() -> Assets {
        let loader = MemoryLoader::new().with_font("res/mono.ttf");
        Assets::new(ResourceRoot::new("res"), Box::new(loader))
    }

    fn data() -> ComponentInitData {
        ComponentInitData::new(ComponentType::Text)
            .with_path("mono.ttf")
            .with_text("Score: 0", 12)
    }

    #[test]
    fn draw_key_follows_text_edits() {
        let mut text = TextComponent::new(&data(), &assets()).unwrap();
        text.set_text("Score: 10");
        text.prepare_draw();

        assert_eq!(
            text.drawable().unwrap().source,
            Some(DrawSource::Text {
                font: "res/mono.ttf".into(),
                pt_size: 12,
                text: "Score: 10".into(),
            })
        );
    }

    #[test]
    fn font_size_can_change() {
        let assets = assets();
        let mut text = TextComponent::new(&data(), &assets).unwrap();

        text.set_font_size(30, &assets).unwrap();
        assert_eq!(text.pt_size(), 30);

        assert!(text.set_font_size(-1, &assets).is_err());
        assert_eq!(text.pt_size(), 30);
    }

    #[test]
    fn missing_font_is_a_component_error() {
        let data = data().with_path("missing.ttf");
        assert!(matches!(
            TextComponent::new(&data, &assets()),
            Err(ComponentError::Resource(_))
        ));
    }
}
