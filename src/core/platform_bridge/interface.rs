//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages and errors crossing the platform → logic thread boundary.
//
//=========================================================================

//=== External Crates =====================================================

use thiserror::Error;

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// The only messages the platform thread sends to the logic thread.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input gathered between two redraws.
    ///
    /// `discrete` keeps arrival order; `continuous` holds at most the
    /// latest cursor position.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    WindowClosed,
}

//=== PlatformError =======================================================

/// Failure to start or keep running the window event loop.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    #[error("event loop error: {0}")]
    EventLoopExecution(String),
}
