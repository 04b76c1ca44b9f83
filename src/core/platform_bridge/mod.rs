//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the window thread and the logic thread. The platform
// produces `PlatformEvent`s; the logic thread drains them through an
// `EventCollector` before every tick.
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub use interface::PlatformError;

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
