//=========================================================================
// Box Component
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;

//=== Internal Modules ====================================================

use super::{Capabilities, Component};
use crate::core::blueprint::{ComponentInitData, ComponentType};
use crate::core::math::Rect;

//=== BoxComponent ========================================================

/// Axis-aligned box anchored at the owner's position.
///
/// Also the fallback for component blocks with an unknown tag.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxComponent {
    pub size: Vec2,
    pub active: bool,
    pub draw_debug: bool,
}

impl BoxComponent {
    pub fn new(data: &ComponentInitData) -> Self {
        Self {
            size: data.size,
            active: true,
            draw_debug: data.draw_debug,
        }
    }

    /// Top-left corner for an owner at `origin`.
    pub fn min(&self, origin: Vec2) -> Vec2 {
        origin
    }

    /// Bottom-right corner for an owner at `origin`.
    pub fn max(&self, origin: Vec2) -> Vec2 {
        origin + self.size
    }

    pub fn as_rect(&self, origin: Vec2) -> Rect {
        Rect::from_origin(origin, self.size)
    }
}

impl Component for BoxComponent {
    fn kind(&self) -> ComponentType {
        ComponentType::Box
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::BOUNDS
    }

    fn bounds(&self, origin: Vec2) -> Option<Rect> {
        Some(self.as_rect(origin))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_spans_from_origin() {
        let data = ComponentInitData::new(ComponentType::Box).with_size(Vec2::new(4.0, 2.0));
        let component = BoxComponent::new(&data);
        let origin = Vec2::new(10.0, 20.0);

        assert!(component.active);
        assert_eq!(component.min(origin), origin);
        assert_eq!(component.max(origin), Vec2::new(14.0, 22.0));
        assert_eq!(component.bounds(origin), Some(Rect::new(10, 20, 4, 2)));
    }

    #[test]
    fn box_only_offers_bounds() {
        let component: Box<dyn Component> =
            Box::new(BoxComponent::new(&ComponentInitData::default()));

        assert!(component.as_ref().has(Capabilities::BOUNDS));
        assert!(!component.as_ref().has(Capabilities::DRAW));
        assert!(component.drawable().is_none());
        assert!(component.as_ref().downcast_ref::<BoxComponent>().is_some());
    }
}
