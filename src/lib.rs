//=========================================================================
// Sage Engine — Library Root
//
// Turns declarative scene files into a live object graph and ticks it.
//
// Typical usage:
// ```no_run
// use sage_engine::EngineBuilder;
//
// fn main() -> Result<(), sage_engine::EngineError> {
//     EngineBuilder::new()
//         .with_resource_root("assets")
//         .with_startup_scene("intro.sgw")
//         .build()
//         .run()
// }
// ```
//
// `core::runtime::Runtime` can also be driven directly, without a window,
// which is how the tests use it.
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` holds the winit integration and is not part of the API.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
