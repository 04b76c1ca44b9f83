//=========================================================================
// Frame Scheduler
//
// One tick over the registry, in registration order:
//
// ```text
// for each live object (objects created mid-pass are visited too):
//   1. update components with the UPDATE capability
//   2. drain pending begin notifications
//   3. update updatable behaviors
// then sweep the destroy queue
// ```
//
// Destruction is always deferred to the sweep, so an object destroyed
// during the pass still finishes it.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;
use std::time::Instant;

//=== External Crates =====================================================

use log::{debug, trace};

//=== Internal Modules ====================================================

use super::Runtime;
use crate::core::behavior::{Behavior, BehaviorContext, BehaviorKey};
use crate::core::components::Capabilities;
use crate::core::object::ObjectId;

//=== Ticking =============================================================

impl Runtime {
    /// Runs one tick with an explicit elapsed time.
    pub fn tick(&mut self, delta_seconds: f32) {
        self.ticks += 1;

        let mut index = 0;
        while let Some(&id) = self.registry.order().get(index) {
            index += 1;
            self.update_components(id, delta_seconds);
            self.run_begins(id);
            self.run_updates(id, delta_seconds);
        }

        self.sweep();
    }

    /// Runs one tick with the wall-clock time since the previous call.
    ///
    /// The first call ticks with zero elapsed time. Returns the elapsed
    /// time used.
    pub fn advance(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        self.tick(delta);
        delta
    }

    //--- Steps ------------------------------------------------------------

    fn update_components(&mut self, id: ObjectId, delta_seconds: f32) {
        let Some(object) = self.registry.get_mut(id) else {
            return;
        };
        for component in object.components_mut() {
            if component.has(Capabilities::UPDATE) {
                component.update(delta_seconds);
            }
        }
    }

    fn run_begins(&mut self, id: ObjectId) {
        while let Some(key) = self
            .registry
            .get_mut(id)
            .and_then(|object| object.pop_pending_begin())
        {
            self.with_behavior(id, key, |behavior, ctx| behavior.begin(ctx));
        }
    }

    fn run_updates(&mut self, id: ObjectId, delta_seconds: f32) {
        let Some(keys) = self.registry.get(id).map(|object| object.updatable_keys()) else {
            return;
        };
        for key in keys {
            self.with_behavior(id, key, |behavior, ctx| behavior.update(ctx, delta_seconds));
        }
    }

    /// Runs `call` with the behavior moved out of its object, so the
    /// context can lend out the whole runtime.
    fn with_behavior(
        &mut self,
        id: ObjectId,
        key: BehaviorKey,
        call: impl FnOnce(&mut Box<dyn Behavior>, &mut BehaviorContext<'_>),
    ) {
        let Some(mut behavior) = self
            .registry
            .get_mut(id)
            .and_then(|object| object.take_behavior(key))
        else {
            return;
        };

        {
            let mut ctx = BehaviorContext::new(self, id);
            call(&mut behavior, &mut ctx);
        }

        match self.registry.get_mut(id) {
            Some(object) => object.restore_behavior(key, behavior),
            None => trace!(target: "runtime", "{} vanished during a callback", id),
        }
    }

    //=====================================================================
    // Sweep
    //=====================================================================

    /// Frees every object queued for destruction.
    ///
    /// Each request covers the object and the direct children captured
    /// when it was made. Surviving parents lose the destroyed child;
    /// surviving children become orphans. Behaviors are dropped before
    /// components.
    fn sweep(&mut self) {
        if self.destroy_queue.is_empty() {
            return;
        }

        let mut doomed = Vec::new();
        for request in self.destroy_queue.take() {
            doomed.push(request.object);
            doomed.extend(request.children);
        }
        let doomed_set: HashSet<ObjectId> = doomed.iter().copied().collect();

        for &id in &doomed {
            let Some(object) = self.registry.get(id) else {
                debug!(target: "runtime", "Stale id {} in destroy queue", id);
                continue;
            };
            let parent = object.parent();
            let children = object.children().to_vec();

            if let Some(parent) = parent.filter(|parent| !doomed_set.contains(parent)) {
                if let Some(parent) = self.registry.get_mut(parent) {
                    parent.remove_child(id);
                }
            }
            for child in children.into_iter().filter(|child| !doomed_set.contains(child)) {
                if let Some(child) = self.registry.get_mut(child) {
                    child.set_parent(None);
                }
            }
        }

        let removed = self.registry.remove_all(&doomed);
        debug!(
            target: "runtime",
            "Swept {} objects ({} remain)",
            removed.len(),
            self.registry.len()
        );

        for mut object in removed {
            object.tear_down();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
