//=========================================================================
// Behavior Context
//=========================================================================
//
// What a behavior sees during `begin` and `update`: its own object, the
// runtime it lives in, and the input and audio services.
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;
use log::debug;

//=== Internal Modules ====================================================

use crate::core::audio::AudioService;
use crate::core::components::Component;
use crate::core::input::InputState;
use crate::core::object::{Object, ObjectId};
use crate::core::runtime::{self, Runtime};

//=== BehaviorContext =====================================================

pub struct BehaviorContext<'a> {
    runtime: &'a mut Runtime,
    object: ObjectId,
}

impl<'a> BehaviorContext<'a> {
    pub(crate) fn new(runtime: &'a mut Runtime, object: ObjectId) -> Self {
        Self { runtime, object }
    }

    //--- Own Object -------------------------------------------------------

    pub fn object_id(&self) -> ObjectId {
        self.object
    }

    /// The behavior's object; `None` once something detached it from the
    /// registry.
    pub fn object(&self) -> Option<&Object> {
        self.runtime.object(self.object)
    }

    pub fn object_mut(&mut self) -> Option<&mut Object> {
        self.runtime.object_mut(self.object)
    }

    /// Absolute position of the own object.
    pub fn position(&self) -> Vec2 {
        self.runtime.position(self.object).unwrap_or_default()
    }

    pub fn translate(&mut self, offset: Vec2) {
        if let Some(object) = self.runtime.object_mut(self.object) {
            object.translate(offset);
        }
    }

    /// First component of type `T` on the own object or its children.
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.runtime.component::<T>(self.object)
    }

    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.runtime.component_mut::<T>(self.object)
    }

    /// Reopens the font of the first text component at `pt_size`.
    pub fn set_text_font_size(&mut self, pt_size: i32) -> runtime::Result<()> {
        self.runtime.set_text_font_size(self.object, pt_size)
    }

    /// Requests destruction of the own object at the end of the tick.
    pub fn destroy_self(&mut self) {
        if let Err(e) = self.runtime.destroy(self.object) {
            debug!(target: "runtime", "destroy_self on {} ignored: {}", self.object, e);
        }
    }

    //--- Services ---------------------------------------------------------

    pub fn input(&self) -> &InputState {
        self.runtime.input()
    }

    pub fn audio(&mut self) -> &mut dyn AudioService {
        self.runtime.audio()
    }

    pub fn runtime(&self) -> &Runtime {
        self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        self.runtime
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::blueprint::{ComponentInitData, ComponentType};
    use crate::core::components::TextComponent;
    use crate::core::resources::MemoryLoader;
    use crate::core::runtime::RuntimeConfig;

    fn runtime() -> Runtime {
        let loader = MemoryLoader::new().with_font("res/mono.ttf");
        Runtime::with_loader(RuntimeConfig::new("res"), Box::new(loader))
    }

    #[test]
    fn destroy_self_twice_queues_once() {
        let mut runtime = runtime();
        let id = runtime.instantiate_at(Vec2::ZERO, Some("Bullet"));

        let mut ctx = BehaviorContext::new(&mut runtime, id);
        ctx.destroy_self();
        ctx.destroy_self();

        assert!(runtime.is_pending_destruction(id));
        runtime.tick(0.0);
        assert!(!runtime.contains(id));
    }

    #[test]
    fn destroy_self_on_a_swept_object_is_ignored() {
        let mut runtime = runtime();
        let id = runtime.instantiate_at(Vec2::ZERO, Some("Bullet"));
        runtime.destroy(id).unwrap();
        runtime.tick(0.0);

        BehaviorContext::new(&mut runtime, id).destroy_self();

        assert!(!runtime.is_pending_destruction(id));
        assert!(runtime.is_empty());
    }

    #[test]
    fn text_font_size_reaches_the_own_text() {
        let mut runtime = runtime();
        let id = runtime.instantiate_at(Vec2::ZERO, Some("Score"));
        let data = ComponentInitData::new(ComponentType::Text)
            .with_path("mono.ttf")
            .with_text("0", 10);
        let text = TextComponent::new(&data, runtime.assets()).unwrap();
        runtime.add_component(id, Box::new(text)).unwrap();

        BehaviorContext::new(&mut runtime, id).set_text_font_size(32).unwrap();

        assert_eq!(runtime.component::<TextComponent>(id).unwrap().pt_size(), 32);
    }
}
