//=========================================================================
// Behavior Slots
//=========================================================================

use super::Behavior;

/// Identifies a behavior within its object, stable across removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BehaviorKey(pub(crate) u32);

/// A behavior attached to an object.
///
/// `behavior` is `None` only while the behavior is running a callback.
pub(crate) struct BehaviorSlot {
    pub(crate) key: BehaviorKey,
    pub(crate) name: String,
    pub(crate) updatable: bool,
    pub(crate) behavior: Option<Box<dyn Behavior>>,
}
