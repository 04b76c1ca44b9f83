//=========================================================================
// Scene Runtime
//
// The live object graph and everything that acts on it:
//
// - `scene`:     the `Runtime` value (instantiation, structure, queries)
// - `scheduler`: per-tick updates and the destruction sweep
// - `draw`:      draw commands for an external renderer
// - `world`:     multi-object world files
//
// The runtime is single-threaded; it lives on the logic thread.
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod destroy_queue;
mod draw;
mod error;
mod registry;
mod scene;
mod scheduler;
mod world;

//=== Public API ==========================================================

pub use config::RuntimeConfig;
pub use draw::DrawCommand;
pub use error::SceneError;
pub use scene::Runtime;
pub use world::World;

/// Result of a runtime operation.
pub type Result<T> = std::result::Result<T, SceneError>;
