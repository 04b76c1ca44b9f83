//=========================================================================
// Resource Loaders
//
// The scene core only needs metadata from external resources: texture
// dimensions (for tile grids and draw rectangles) and a confirmation that
// a font exists at a usable size. Pixel data stays with the renderer.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

//=== External Crates =====================================================

use log::debug;

//=== Internal Modules ====================================================

use super::ResourceError;
use crate::core::math::Rect;

//=== Metadata ============================================================

/// Pixel dimensions of a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Full-texture rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// A font validated at a point size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub path: PathBuf,
    pub pt_size: i32,
}

//=== ResourceLoader ======================================================

/// Source of external resource metadata.
///
/// Paths handed to a loader are already resolved against the resource
/// root.
pub trait ResourceLoader {
    fn load_texture(&self, path: &Path) -> Result<TextureInfo, ResourceError>;

    fn load_font(&self, path: &Path, pt_size: i32) -> Result<FontInfo, ResourceError>;
}

fn check_pt_size(path: &Path, pt_size: i32) -> Result<(), ResourceError> {
    if pt_size <= 0 {
        return Err(ResourceError::Invalid {
            path: path.to_path_buf(),
            reason: format!("point size must be positive, got {pt_size}"),
        });
    }
    Ok(())
}

//=== FsResourceLoader ====================================================

/// Loader backed by the filesystem.
///
/// Texture dimensions come from the image header via the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResourceLoader;

impl ResourceLoader for FsResourceLoader {
    fn load_texture(&self, path: &Path) -> Result<TextureInfo, ResourceError> {
        if !path.is_file() {
            return Err(ResourceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let (width, height) =
            image::image_dimensions(path).map_err(|error| ResourceError::Invalid {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?;

        debug!(target: "resources", "Loaded texture {} ({}x{})", path.display(), width, height);
        Ok(TextureInfo::new(width, height))
    }

    fn load_font(&self, path: &Path, pt_size: i32) -> Result<FontInfo, ResourceError> {
        if !path.is_file() {
            return Err(ResourceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        check_pt_size(path, pt_size)?;

        debug!(target: "resources", "Loaded font {} at {}pt", path.display(), pt_size);
        Ok(FontInfo {
            path: path.to_path_buf(),
            pt_size,
        })
    }
}

//=== MemoryLoader ========================================================

/// Loader serving a fixed set of resources from memory.
///
/// Counts texture loads so callers can observe cache sharing.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    textures: HashMap<PathBuf, TextureInfo>,
    fonts: HashSet<PathBuf>,
    texture_loads: Cell<usize>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texture(mut self, path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        self.textures
            .insert(path.into(), TextureInfo::new(width, height));
        self
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.fonts.insert(path.into());
        self
    }

    /// Number of successful texture loads so far.
    pub fn texture_loads(&self) -> usize {
        self.texture_loads.get()
    }
}

impl ResourceLoader for MemoryLoader {
    fn load_texture(&self, path: &Path) -> Result<TextureInfo, ResourceError> {
        let info = self
            .textures
            .get(path)
            .copied()
            .ok_or_else(|| ResourceError::NotFound {
                path: path.to_path_buf(),
            })?;

        self.texture_loads.set(self.texture_loads.get() + 1);
        Ok(info)
    }

    fn load_font(&self, path: &Path, pt_size: i32) -> Result<FontInfo, ResourceError> {
        if !self.fonts.contains(path) {
            return Err(ResourceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        check_pt_size(path, pt_size)?;

        Ok(FontInfo {
            path: path.to_path_buf(),
            pt_size,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
