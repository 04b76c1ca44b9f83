//=========================================================================
// Behavior Table
//
// Name → constructor association supplied by the embedding application.
// Names that are not registered resolve to nothing; the runtime logs them
// and moves on.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::fmt;

//=== Internal Modules ====================================================

use super::Behavior;
use crate::core::object::ObjectId;

//=== Types ===============================================================

type Constructor = Box<dyn Fn(ObjectId) -> Box<dyn Behavior>>;

struct Registration {
    constructor: Constructor,
    updatable: bool,
}

//=== BehaviorTable =======================================================

#[derive(Default)]
pub struct BehaviorTable {
    entries: HashMap<String, Registration>,
}

impl BehaviorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an updatable behavior under `name`.
    ///
    /// The constructor receives the id of the object it is attached to.
    /// Registering a name twice replaces the earlier constructor.
    pub fn register<F, B>(&mut self, name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(ObjectId) -> B + 'static,
        B: Behavior,
    {
        self.register_with(name, true, constructor)
    }

    /// Registers a behavior, choosing whether it receives updates.
    pub fn register_with<F, B>(
        &mut self,
        name: impl Into<String>,
        updatable: bool,
        constructor: F,
    ) -> &mut Self
    where
        F: Fn(ObjectId) -> B + 'static,
        B: Behavior,
    {
        let constructor: Constructor =
            Box::new(move |id| -> Box<dyn Behavior> { Box::new(constructor(id)) });
        self.entries.insert(
            name.into(),
            Registration {
                constructor,
                updatable,
            },
        );
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the behavior registered under `name` for `object`.
    ///
    /// Returns the instance and whether it is updatable.
    pub(crate) fn create(&self, name: &str, object: ObjectId) -> Option<(Box<dyn Behavior>, bool)> {
        self.entries
            .get(name)
            .map(|entry| ((entry.constructor)(object), entry.updatable))
    }
}

impl fmt::Debug for BehaviorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(ObjectId);
    impl Behavior for Marker {}

    #[test]
    fn creates_registered_behaviors() {
        let mut table = BehaviorTable::new();
        table
            .register("Marker", Marker)
            .register_with("Passive", false, Marker);

        let id = ObjectId::new(3, 1);
        let (behavior, updatable) = table.create("Marker", id).unwrap();
        assert!(updatable);
        assert_eq!(behavior.as_ref().downcast_ref::<Marker>().unwrap().0, id);

        let (_, updatable) = table.create("Passive", id).unwrap();
        assert!(!updatable);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unknown_names_create_nothing() {
        let table = BehaviorTable::new();
        assert!(table.create("Ghost", ObjectId::new(0, 0)).is_none());
        assert!(!table.contains("Ghost"));
    }
}
