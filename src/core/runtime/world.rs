//=========================================================================
// Worlds
//
// A world file lists top-level objects, one block each. A block with the
// `path` specifier names an object file to load; any other block is the
// object itself.
//
// ```text
// <objects/player.sgo | path>
// </>
// <Ground>
//     position = 0, 400
// </>
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::{Path, PathBuf};

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Modules ====================================================

use super::{Result, Runtime};
use crate::core::blueprint::PATH_SPECIFIER;
use crate::core::object::ObjectId;
use crate::core::parser::Parser;

//=== World ===============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    path: PathBuf,
    roots: Vec<ObjectId>,
}

impl World {
    /// Materializes every top-level object of a resource-relative world
    /// file.
    ///
    /// # Errors
    ///
    /// Fails on the first object that cannot be built; objects created
    /// before it stay in the runtime.
    pub fn load(runtime: &mut Runtime, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let parser = Parser::from_file(runtime.resources().path_to(&path))?;

        let mut roots = Vec::with_capacity(parser.blocks().len());
        for block in parser.blocks() {
            let root = if block.has(PATH_SPECIFIER) {
                runtime.instantiate_file(block.name())?
            } else {
                runtime.instantiate_block(block)?
            };
            roots.push(root);
        }

        info!(
            target: "runtime",
            "World `{}` loaded with {} objects",
            path.display(),
            roots.len()
        );
        Ok(Self { path, roots })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    /// Requests destruction of every root still alive.
    pub fn unload(self, runtime: &mut Runtime) {
        let mut requested = 0;
        for &root in &self.roots {
            if runtime.destroy(root).is_ok() {
                requested += 1;
            }
        }
        debug!(
            target: "runtime",
            "World `{}` unloading {} roots",
            self.path.display(),
            requested
        );
    }
}

//=== Scene Loading =======================================================

/// World files are recognized by extension.
const WORLD_EXTENSION: &str = "sgw";

impl Runtime {
    /// Loads a resource-relative scene: a `.sgw` world file, or a single
    /// object file for any other extension.
    pub fn load_scene(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let is_world = path
            .extension()
            .is_some_and(|extension| extension == WORLD_EXTENSION);

        if is_world {
            World::load(self, path)?;
        } else {
            self.instantiate_file(path)?;
        }
        info!(target: "runtime", "Scene `{}` loaded", path.display());
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
