//=========================================================================
// Resources
//
// Everything the scene core needs from disk goes through this module:
// - `ResourceRoot` resolves resource-relative paths ("player.sgo")
//   against the configured root directory.
// - `ResourceLoader` is the seam to the outside world. The filesystem
//   implementation reads image headers; the in-memory one serves tests
//   and headless tools.
// - `Assets` bundles root, loader and the shared caches owned by the
//   runtime.
//
//=========================================================================

//=== Module Declarations =================================================

mod assets;
mod error;
mod loader;
mod paths;

//=== Public API ==========================================================

pub use assets::{AnimationHandle, Assets, TextureHandle};
pub use error::ResourceError;
pub use loader::{FontInfo, FsResourceLoader, MemoryLoader, ResourceLoader, TextureInfo};
pub use paths::ResourceRoot;
