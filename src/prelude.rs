//=========================================================================
// Prelude
//=========================================================================
//
// Re-exports the types most scene code touches.
//
//   use sage_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Runtime
pub use crate::core::object::{Object, ObjectData, ObjectId};
pub use crate::core::runtime::{DrawCommand, Runtime, RuntimeConfig, SceneError, World};

// Behaviors and components
pub use crate::core::behavior::{Behavior, BehaviorContext};
pub use crate::core::blueprint::{ComponentType, ObjectBlueprint};
pub use crate::core::components::{Capabilities, Component};

// Input and audio
pub use crate::core::audio::AudioService;
pub use crate::core::input::{InputState, KeyCode, Modifiers, MouseButton};

// Math
pub use crate::core::math::{Rect, Vec2};
