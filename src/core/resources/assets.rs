//=========================================================================
// Assets
//
// Resource root, loader and shared caches, owned by the runtime and lent
// to component constructors.
//
// Cache keys are resolved paths, so two components naming the same file
// share one entry regardless of how they reached it.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::path::{Path, PathBuf};

//=== External Crates =====================================================

use log::debug;

//=== Internal Modules ====================================================

use super::{FontInfo, ResourceError, ResourceLoader, ResourceRoot, TextureInfo};
use crate::core::cache::{Cache, CacheHandle, Eviction};
use crate::core::components::{AnimationSet, ComponentError};
use crate::core::parser::Parser;

//=== Handle Aliases ======================================================

pub type TextureHandle = CacheHandle<PathBuf, TextureInfo>;
pub type AnimationHandle = CacheHandle<PathBuf, AnimationSet>;

//=== Assets ==============================================================

pub struct Assets {
    root: ResourceRoot,
    loader: Box<dyn ResourceLoader>,
    textures: Cache<PathBuf, TextureInfo>,
    animations: Cache<PathBuf, AnimationSet>,
}

impl Assets {
    pub fn new(root: ResourceRoot, loader: Box<dyn ResourceLoader>) -> Self {
        Self {
            root,
            loader,
            textures: Cache::new(),
            animations: Cache::new(),
        }
    }

    pub fn root(&self) -> &ResourceRoot {
        &self.root
    }

    pub fn path_to(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.path_to(relative)
    }

    //--- Loading ----------------------------------------------------------

    /// Returns the cached texture at `relative`, loading it on first use.
    pub fn texture(&self, relative: &str) -> Result<TextureHandle, ResourceError> {
        let path = self.root.path_to(relative);
        if let Some(handle) = self.textures.find(&path) {
            return Ok(handle);
        }

        let info = self.loader.load_texture(&path)?;
        Ok(self.textures.add(path, info))
    }

    /// Opens the font at `relative` with the given point size.
    pub fn font(&self, relative: &str, pt_size: i32) -> Result<FontInfo, ResourceError> {
        self.loader.load_font(&self.root.path_to(relative), pt_size)
    }

    /// Returns the cached animation table at `relative`, parsing the file
    /// on first use.
    ///
    /// Tables whose file carries `persistent` are never evicted.
    pub fn animations(&self, relative: &str) -> Result<AnimationHandle, ComponentError> {
        let path = self.root.path_to(relative);
        if let Some(handle) = self.animations.find(&path) {
            return Ok(handle);
        }

        let block = Parser::from_file(&path)?.into_main_block()?;
        let set = AnimationSet::from_block(&block)?;
        let eviction = if set.is_persistent() {
            Eviction::Persistent
        } else {
            Eviction::Auto
        };

        debug!(
            target: "resources",
            "Cached {} animations from {}",
            set.len(),
            path.display()
        );
        Ok(self.animations.add_with(path, set, eviction))
    }

    //--- Caches -----------------------------------------------------------

    pub fn textures(&self) -> &Cache<PathBuf, TextureInfo> {
        &self.textures
    }

    pub fn animation_cache(&self) -> &Cache<PathBuf, AnimationSet> {
        &self.animations
    }
}

impl fmt::Debug for Assets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assets")
            .field("root", &self.root)
            .field("textures", &self.textures)
            .field("animations", &self.animations)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::MemoryLoader;
    use std::rc::Rc;

    struct SharedLoader(Rc<MemoryLoader>);

    impl ResourceLoader for SharedLoader {
        fn load_texture(&self, path: &Path) -> Result<TextureInfo, ResourceError> {
            self.0.load_texture(path)
        }

        fn load_font(&self, path: &Path, pt_size: i32) -> Result<FontInfo, ResourceError> {
            self.0.load_font(path, pt_size)
        }
    }

    #[test]
    fn texture_is_loaded_once_while_in_use() {
        let loader = Rc::new(MemoryLoader::new().with_texture("res/a.png", 4, 4));
        let assets = Assets::new(
            ResourceRoot::new("res"),
            Box::new(SharedLoader(Rc::clone(&loader))),
        );

        let first = assets.texture("a.png").unwrap();
        let second = assets.texture("a.png").unwrap();
        assert_eq!(loader.texture_loads(), 1);
        assert_eq!(first.ref_count(), 2);

        drop(first);
        drop(second);
        let _third = assets.texture("a.png").unwrap();
        assert_eq!(loader.texture_loads(), 2);
    }

    #[test]
    fn missing_animation_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let assets = Assets::new(ResourceRoot::new(dir.path()), Box::new(MemoryLoader::new()));

        assert!(matches!(
            assets.animations("none.sganim"),
            Err(ComponentError::Parse(_))
        ));
    }
}
