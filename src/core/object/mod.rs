//=========================================================================
// Objects
//
// A live object owns its attributes, components and behaviors. Structure
// (parent, children) is stored as ids; the runtime's registry owns every
// object and keeps the links symmetric:
//
//   c ∈ p.children  ⇔  c.parent == Some(p)
//
// Operations that need more than one object (attach, absolute position,
// capability search across children) live on `Runtime`.
//
//=========================================================================

//=== Module Declarations =================================================

mod data;
mod error;
mod id;

//=== Public API ==========================================================

pub use data::{Layers, ObjectData};
pub use error::ObjectError;
pub use id::ObjectId;

//=== Standard Library Imports ============================================

use std::collections::VecDeque;
use std::fmt;

//=== External Crates =====================================================

use glam::Vec2;

//=== Internal Modules ====================================================

use crate::core::behavior::{Behavior, BehaviorKey, BehaviorSlot};
use crate::core::components::Component;

//=== Object ==============================================================

pub struct Object {
    id: ObjectId,
    data: ObjectData,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
    components: Vec<Box<dyn Component>>,
    behaviors: Vec<BehaviorSlot>,
    pending_begin: VecDeque<BehaviorKey>,
    next_key: u32,
}

impl Object {
    pub(crate) fn new(id: ObjectId, data: ObjectData) -> Self {
        Self {
            id,
            data,
            parent: None,
            children: Vec::new(),
            components: Vec::new(),
            behaviors: Vec::new(),
            pending_begin: VecDeque::new(),
            next_key: 0,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    //=====================================================================
    // Attributes
    //=====================================================================

    pub fn data(&self) -> &ObjectData {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
    }

    /// Position relative to the parent.
    pub fn relative_position(&self) -> Vec2 {
        self.data.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.data.position = position;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.data.position += offset;
    }

    /// Size relative to the parent.
    pub fn relative_size(&self) -> Vec2 {
        self.data.size
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.data.size = size;
    }

    pub fn is_visible(&self) -> bool {
        self.data.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.data.visible = visible;
    }

    pub fn is_screen_position(&self) -> bool {
        self.data.screen_position
    }

    pub fn should_draw_debug(&self) -> bool {
        self.data.draw_debug
    }

    pub fn layers(&self) -> Layers {
        self.data.layers
    }

    pub fn matches_layers(&self, layers: Layers) -> bool {
        self.data.matches_layers(layers)
    }

    /// Returns `true` if both objects share a layer.
    pub fn matches(&self, other: &Object) -> bool {
        self.matches_layers(other.layers())
    }

    //=====================================================================
    // Structure
    //=====================================================================

    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    pub fn is_orphan(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ObjectId>) {
        self.parent = parent;
    }

    pub(crate) fn push_child(&mut self, child: ObjectId) {
        self.children.push(child);
    }

    pub(crate) fn remove_child(&mut self, child: ObjectId) -> bool {
        let before = self.children.len();
        self.children.retain(|&id| id != child);
        self.children.len() != before
    }

    //=====================================================================
    // Components
    //=====================================================================

    pub fn components(&self) -> impl Iterator<Item = &(dyn Component + 'static)> {
        self.components.iter().map(|component| component.as_ref())
    }

    pub fn component(&self, index: usize) -> Option<&(dyn Component + 'static)> {
        self.components.get(index).map(|component| component.as_ref())
    }

    pub fn component_mut(&mut self, index: usize) -> Option<&mut (dyn Component + 'static)> {
        self.components.get_mut(index).map(|component| component.as_mut())
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub(crate) fn components_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut (dyn Component + 'static)> {
        self.components.iter_mut().map(|component| component.as_mut())
    }

    pub fn add_component(&mut self, component: Box<dyn Component>) {
        self.components.push(component);
    }

    /// Detaches and returns the component at `index`.
    pub fn remove_component(&mut self, index: usize) -> Result<Box<dyn Component>, ObjectError> {
        if index >= self.components.len() {
            return Err(ObjectError::ComponentOutOfRange {
                object: self.data.name.clone(),
                index,
                count: self.components.len(),
            });
        }
        Ok(self.components.remove(index))
    }

    //=====================================================================
    // Behaviors
    //=====================================================================

    /// Attaches a behavior and queues its begin notification.
    pub fn add_behavior(
        &mut self,
        name: impl Into<String>,
        behavior: Box<dyn Behavior>,
        updatable: bool,
    ) {
        let key = BehaviorKey(self.next_key);
        self.next_key += 1;

        self.behaviors.push(BehaviorSlot {
            key,
            name: name.into(),
            updatable,
            behavior: Some(behavior),
        });
        self.pending_begin.push_back(key);
    }

    /// Detaches the first behavior attached under `name`.
    ///
    /// A behavior removed from inside its own callback is dropped once the
    /// callback returns.
    pub fn remove_behavior(&mut self, name: &str) -> Result<(), ObjectError> {
        let position = self
            .behaviors
            .iter()
            .position(|slot| slot.name == name)
            .ok_or_else(|| ObjectError::BehaviorNotFound {
                object: self.data.name.clone(),
                name: name.to_string(),
            })?;

        let slot = self.behaviors.remove(position);
        self.pending_begin.retain(|&key| key != slot.key);
        Ok(())
    }

    pub fn has_behavior(&self, name: &str) -> bool {
        self.behaviors.iter().any(|slot| slot.name == name)
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    pub fn behavior_names(&self) -> impl Iterator<Item = &str> {
        self.behaviors.iter().map(|slot| slot.name.as_str())
    }

    /// First attached behavior of type `T`.
    pub fn behavior<T: Behavior>(&self) -> Option<&T> {
        self.behaviors
            .iter()
            .filter_map(|slot| slot.behavior.as_deref())
            .find_map(|behavior| behavior.downcast_ref::<T>())
    }

    pub fn behavior_mut<T: Behavior>(&mut self) -> Option<&mut T> {
        self.behaviors
            .iter_mut()
            .filter_map(|slot| slot.behavior.as_deref_mut())
            .find_map(|behavior| behavior.downcast_mut::<T>())
    }

    /// Number of behaviors still waiting for their begin notification.
    pub fn pending_begin_count(&self) -> usize {
        self.pending_begin.len()
    }

    //--- Scheduler Access -------------------------------------------------

    pub(crate) fn pop_pending_begin(&mut self) -> Option<BehaviorKey> {
        self.pending_begin.pop_front()
    }

    pub(crate) fn updatable_keys(&self) -> Vec<BehaviorKey> {
        self.behaviors
            .iter()
            .filter(|slot| slot.updatable)
            .map(|slot| slot.key)
            .collect()
    }

    /// Moves a behavior out of its slot for the duration of a callback.
    pub(crate) fn take_behavior(&mut self, key: BehaviorKey) -> Option<Box<dyn Behavior>> {
        self.behaviors
            .iter_mut()
            .find(|slot| slot.key == key)
            .and_then(|slot| slot.behavior.take())
    }

    /// Puts a behavior back; drops it if its slot was removed meanwhile.
    pub(crate) fn restore_behavior(&mut self, key: BehaviorKey, behavior: Box<dyn Behavior>) {
        if let Some(slot) = self.behaviors.iter_mut().find(|slot| slot.key == key) {
            slot.behavior = Some(behavior);
        }
    }

    /// Drops behaviors, then components, in that order.
    pub(crate) fn tear_down(&mut self) {
        self.pending_begin.clear();
        self.behaviors.clear();
        self.components.clear();
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("id", &self.id)
            .field("name", &self.data.name)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("components", &self.components.len())
            .field("behaviors", &self.behaviors.len())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
