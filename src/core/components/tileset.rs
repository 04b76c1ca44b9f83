//=========================================================================
// Tileset Component
//
// Cuts a texture into a grid of equally sized tiles and draws one of
// them. Tile size comes from the component's `size`; `margin` surrounds
// the whole grid and `spacing` separates neighboring tiles.
//
// ```text
// margin
//  ↓
//  ┌──┐sp┌──┐sp┌──┐
//  │0 │  │1 │  │2 │
//  └──┘  └──┘  └──┘
//  ┌──┐  ┌──┐  ┌──┐
//  │3 │  │4 │  │5 │
//  └──┘  └──┘  └──┘
// ```
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;

//=== Internal Modules ====================================================

use super::{Capabilities, Component, ComponentError, DrawSource, Drawable};
use crate::core::blueprint::{ComponentInitData, ComponentType};
use crate::core::math::Rect;
use crate::core::resources::{Assets, TextureHandle};

//=== TilesetComponent ====================================================

#[derive(Debug)]
pub struct TilesetComponent {
    drawable: Drawable,
    texture: TextureHandle,
    tile_width: i32,
    tile_height: i32,
    margin: i32,
    spacing: i32,
    columns: i32,
    rows: i32,
    index: u32,
}

impl TilesetComponent {
    /// Loads the texture and computes the tile grid.
    ///
    /// # Errors
    ///
    /// Fails when the texture cannot be loaded or when no whole tile fits
    /// inside it.
    pub fn new(data: &ComponentInitData, assets: &Assets) -> Result<Self, ComponentError> {
        let texture = assets.texture(&data.path)?;
        let tile_width = data.size.x as i32;
        let tile_height = data.size.y as i32;

        let invalid = || ComponentError::InvalidTileset {
            path: data.path.clone(),
            tile_width,
            tile_height,
        };

        if tile_width <= 0 || tile_height <= 0 {
            return Err(invalid());
        }

        let bounds = texture.bounds();
        let columns = tiles_along(bounds.w, tile_width, data.margin, data.spacing);
        let rows = tiles_along(bounds.h, tile_height, data.margin, data.spacing);
        if columns <= 0 || rows <= 0 {
            return Err(invalid());
        }

        let drawable =
            Drawable::from_data(data).with_source(DrawSource::Texture(texture.key().clone()));

        let mut tileset = Self {
            drawable,
            texture,
            tile_width,
            tile_height,
            margin: data.margin,
            spacing: data.spacing,
            columns,
            rows,
            index: 0,
        };
        tileset.set_index(0);
        Ok(tileset)
    }

    //--- Tile Selection ---------------------------------------------------

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Selects the tile to draw, counting left to right, top to bottom.
    /// Indices past the last tile wrap around.
    pub fn set_index(&mut self, index: u32) {
        // columns and rows are positive, checked in `new`
        let count = self.columns.unsigned_abs() * self.rows.unsigned_abs();
        let index = index % count.max(1);
        self.index = index;

        // index < columns * rows, so the tile offsets stay inside the texture
        let columns = self.columns.unsigned_abs();
        let tile_x = (index % columns) as i32;
        let tile_y = (index / columns) as i32;

        self.drawable.region = Some(Rect::new(
            self.margin + (self.tile_width + self.spacing) * tile_x,
            self.margin + (self.tile_height + self.spacing) * tile_y,
            self.tile_width,
            self.tile_height,
        ));
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn tile_count(&self) -> i32 {
        self.columns * self.rows
    }
}

/// Number of whole tiles along one texture axis.
fn tiles_along(extent: i32, tile: i32, margin: i32, spacing: i32) -> i32 {
    let mut usable = extent - margin * 2;
    usable -= (usable / tile - 1) * spacing;
    usable / tile
}

impl Component for TilesetComponent {
    fn kind(&self) -> ComponentType {
        ComponentType::Tileset
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::{MemoryLoader, ResourceRoot};

    fn assets() -> Assets {
        let loader = MemoryLoader::new()
            .with_texture("res/tiles.png", 64, 32)
            .with_texture("res/spaced.png", 37, 19);
        Assets::new(ResourceRoot::new("res"), Box::new(loader))
    }

    fn data(path: &str, tile: f32) -> ComponentInitData {
        ComponentInitData::new(ComponentType::Tileset)
            .with_path(path)
            .with_size(Vec2::splat(tile))
    }

    #[test]
    fn computes_grid_without_margin() {
        let tileset = TilesetComponent::new(&data("tiles.png", 16.0), &assets()).unwrap();

        assert_eq!((tileset.columns(), tileset.rows()), (4, 2));
        assert_eq!(tileset.tile_count(), 8);
        assert_eq!(tileset.drawable().unwrap().region, Some(Rect::new(0, 0, 16, 16)));
    }

    #[test]
    fn index_selects_row_major_tile() {
        let mut tileset = TilesetComponent::new(&data("tiles.png", 16.0), &assets()).unwrap();
        tileset.set_index(5);

        assert_eq!(tileset.index(), 5);
        assert_eq!(tileset.drawable().unwrap().region, Some(Rect::new(16, 16, 16, 16)));
    }

    #[test]
    fn index_past_last_tile_wraps() {
        let mut tileset = TilesetComponent::new(&data("tiles.png", 16.0), &assets()).unwrap();

        tileset.set_index(13);
        assert_eq!(tileset.index(), 5);
        assert_eq!(tileset.drawable().unwrap().region, Some(Rect::new(16, 16, 16, 16)));

        tileset.set_index(2_000_000_003);
        assert_eq!(tileset.index(), 2_000_000_003 % 8);
        assert_eq!(tileset.drawable().unwrap().region, Some(Rect::new(48, 0, 16, 16)));

        tileset.set_index(u32::MAX);
        assert_eq!(tileset.index(), u32::MAX % 8);
        assert_eq!(tileset.drawable().unwrap().region, Some(Rect::new(48, 16, 16, 16)));
    }

    #[test]
    fn margin_and_spacing_offset_tiles() {
        // 37 wide: 1 margin, tiles at x = 1, 10, 19, 28
        let mut spaced = data("spaced.png", 8.0);
        spaced.margin = 1;
        spaced.spacing = 1;
        let mut tileset = TilesetComponent::new(&spaced, &assets()).unwrap();

        assert_eq!((tileset.columns(), tileset.rows()), (4, 2));
        tileset.set_index(2);
        assert_eq!(tileset.drawable().unwrap().region, Some(Rect::new(19, 1, 8, 8)));
    }

    #[test]
    fn zero_tile_size_is_an_error() {
        assert!(matches!(
            TilesetComponent::new(&data("tiles.png", 0.0), &assets()),
            Err(ComponentError::InvalidTileset { .. })
        ));
    }

    #[test]
    fn oversized_tile_is_an_error() {
        assert!(TilesetComponent::new(&data("tiles.png", 128.0), &assets()).is_err());
    }
}
