//=========================================================================
// Input
//
// Input events produced by the platform thread and the per-tick state the
// logic thread builds from them. Behaviors read the state through
// `BehaviorContext::input`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state::InputState;
