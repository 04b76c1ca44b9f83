//=========================================================================
// Object Registry
//
// Single owner of every live object. Slots are addressed by
// `ObjectId::index`; a freed slot is reused with a bumped generation so
// stale ids resolve to nothing. `order` keeps insertion order for the
// scheduler.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Modules ====================================================

use crate::core::object::{Object, ObjectId};

//=== Slot ================================================================

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    object: Option<Object>,
}

//=== Registry ============================================================

#[derive(Debug, Default)]
pub(crate) struct Registry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<ObjectId>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores the object built by `make`, handing it its id.
    pub(crate) fn insert_with(&mut self, make: impl FnOnce(ObjectId) -> Object) -> ObjectId {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                (self.slots.len() - 1) as u32
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        let id = ObjectId::new(index, slot.generation);
        slot.object = Some(make(id));

        self.order.push(id);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: ObjectId) -> Option<&Object> {
        self.slots
            .get(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())?
            .object
            .as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.slots
            .get_mut(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())?
            .object
            .as_mut()
    }

    #[inline]
    pub(crate) fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Takes the objects out of their slots and drops them from the order.
    ///
    /// Ids that are no longer live are skipped.
    pub(crate) fn remove_all(&mut self, ids: &[ObjectId]) -> Vec<Object> {
        let mut removed = Vec::with_capacity(ids.len());
        let mut gone = HashSet::with_capacity(ids.len());

        for &id in ids {
            let Some(slot) = self
                .slots
                .get_mut(id.index() as usize)
                .filter(|slot| slot.generation == id.generation())
            else {
                continue;
            };
            if let Some(object) = slot.object.take() {
                self.free.push(id.index());
                gone.insert(id);
                removed.push(object);
            }
        }

        if !gone.is_empty() {
            self.order.retain(|id| !gone.contains(id));
        }
        removed
    }

    /// Live ids in insertion order.
    pub(crate) fn order(&self) -> &[ObjectId] {
        &self.order
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Object> {
        self.order.iter().filter_map(|&id| self.get(id))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::object::ObjectData;
    use glam::Vec2;

    fn insert(registry: &mut Registry, name: &str) -> ObjectId {
        registry.insert_with(|id| Object::new(id, ObjectData::new(name, Vec2::ZERO)))
    }

    #[test]
    fn keeps_insertion_order() {
        let mut registry = Registry::new();
        let a = insert(&mut registry, "a");
        let b = insert(&mut registry, "b");
        let c = insert(&mut registry, "c");

        assert_eq!(registry.order(), &[a, b, c]);
        let names: Vec<_> = registry.iter().map(Object::name).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn reused_slots_reject_stale_ids() {
        let mut registry = Registry::new();
        let old = insert(&mut registry, "old");
        assert_eq!(registry.remove_all(&[old]).len(), 1);

        let new = insert(&mut registry, "new");
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());

        assert!(!registry.contains(old));
        assert_eq!(registry.get(new).map(Object::name), Some("new"));
    }

    #[test]
    fn removing_twice_is_harmless() {
        let mut registry = Registry::new();
        let a = insert(&mut registry, "a");
        let b = insert(&mut registry, "b");

        let removed = registry.remove_all(&[a, a, b]);
        assert_eq!(removed.len(), 2);
        assert_eq!(registry.len(), 0);
        assert!(registry.remove_all(&[a]).is_empty());
    }
}
