//=========================================================================
// Component Trait
//
// Components are composed, not derived. Each one declares which
// capabilities it offers and the runtime queries them by flag:
//
// ```text
// DRAW    → drawable() returns the draw record; prepare_draw() runs first
// UPDATE  → update(dt) is called once per tick, before behaviors
// BOUNDS  → bounds(origin) returns a pixel rectangle
// ```
//
//=========================================================================

//=== External Crates =====================================================

use bitflags::bitflags;
use glam::Vec2;

//=== Internal Modules ====================================================

use super::Drawable;
use crate::core::any::AsAny;
use crate::core::blueprint::ComponentType;
use crate::core::math::Rect;

//=== Capabilities ========================================================

bitflags! {
    /// Capabilities a component exposes to the runtime.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const DRAW   = 1 << 0;
        const UPDATE = 1 << 1;
        const BOUNDS = 1 << 2;
    }
}

//=== Component ===========================================================

/// Capability unit attached to an object.
pub trait Component: AsAny {
    /// Tag this component was constructed from.
    fn kind(&self) -> ComponentType;

    fn capabilities(&self) -> Capabilities;

    /// Per-tick hook, called only with [`Capabilities::UPDATE`].
    fn update(&mut self, _delta_seconds: f32) {}

    /// Draw record, present only with [`Capabilities::DRAW`].
    fn drawable(&self) -> Option<&Drawable> {
        None
    }

    /// Refreshes the draw record before a draw list is built.
    fn prepare_draw(&mut self) {}

    /// Pixel bounds given the owner's absolute position.
    fn bounds(&self, _origin: Vec2) -> Option<Rect> {
        None
    }
}

impl dyn Component {
    /// Returns `true` if every flag in `capabilities` is offered.
    pub fn has(&self, capabilities: Capabilities) -> bool {
        self.capabilities().contains(capabilities)
    }

    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
