//=========================================================================
// Behaviors
//
// User-defined logic attached to objects by name. A scene file lists
// behavior names under `Scripts`; the embedding application maps those
// names to constructors in a `BehaviorTable`.
//
// Lifecycle of one attached behavior:
// ```text
// attach      → begin queued
// next tick   → begin(ctx)            exactly once, before any update
// every tick  → update(ctx, dt)       only when registered as updatable
// sweep       → dropped with its object
// ```
//
// During a callback the behavior is taken out of its object, so the
// context can hand out `&mut Runtime` without aliasing it.
//
//=========================================================================

//=== Module Declarations =================================================

mod context;
mod slot;
mod table;

//=== Public API ==========================================================

pub use context::BehaviorContext;
pub use table::BehaviorTable;

pub(crate) use slot::{BehaviorKey, BehaviorSlot};

//=== Internal Modules ====================================================

use crate::core::any::AsAny;

//=== Behavior ============================================================

/// Per-object scripted logic.
pub trait Behavior: AsAny {
    /// Called once, on the first tick after attachment.
    fn begin(&mut self, _ctx: &mut BehaviorContext<'_>) {}

    /// Called every tick for updatable behaviors.
    fn update(&mut self, _ctx: &mut BehaviorContext<'_>, _delta_seconds: f32) {}
}

impl dyn Behavior {
    pub fn downcast_ref<T: Behavior>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Behavior>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
