//=========================================================================
// Resource Root
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::{Path, PathBuf};

//=== ResourceRoot ========================================================

/// Directory that resource-relative paths are resolved against.
///
/// Absolute paths pass through `path_to` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoot {
    root: PathBuf,
}

impl ResourceRoot {
    /// Root used when none is configured.
    pub const DEFAULT: &'static str = "resources";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolves a resource-relative path.
    pub fn path_to(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Strips the root from a resolved path, if it is under the root.
    pub fn relative<'a>(&self, full: &'a Path) -> Option<&'a Path> {
        full.strip_prefix(&self.root).ok()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for ResourceRoot {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
