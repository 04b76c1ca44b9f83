//=========================================================================
// Dynamic Access
//
// Upcast helper for trait objects that need an escape hatch back to
// their concrete type (components, behaviors).
//
// Call it on `&dyn Trait`, never on `&Box<dyn Trait>`: the blanket impl
// also covers the box itself, which would yield the box's own `Any`.
//
//=========================================================================

use std::any::Any;

/// Blanket upcast to `Any`.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
