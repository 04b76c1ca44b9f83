//=========================================================================
// Input Events
//
// Portable representation of keyboard and mouse input. The platform layer
// converts winit events into these; the logic thread folds them into an
// `InputState`.
//
// ```text
// winit WindowEvent → InputProcessor → InputEvent → InputBuffer
//                                            ↓ (channel)
//                                       InputState (logic thread)
// ```
//
//=========================================================================

//=== External Crates =====================================================

use bitflags::bitflags;

//=== MouseButton =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side, macro and other non-standard buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical key identifier.
///
/// Only the keys a scene behavior is likely to bind are listed; anything
/// else arrives as `Unidentified` and is filtered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Digits -----------------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Letters ----------------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrows -----------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special ----------------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    Unidentified,
}

//=== Modifiers ===========================================================

bitflags! {
    /// Modifier keys held when an event was produced.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

//=== InputEvent ==========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Cursor position in window pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Modifiers carried by the event; cursor moves carry none.
    pub fn modifiers(&self) -> Option<Modifiers> {
        match self {
            Self::KeyDown { modifiers, .. }
            | Self::KeyUp { modifiers, .. }
            | Self::MouseButtonDown { modifiers, .. }
            | Self::MouseButtonUp { modifiers, .. } => Some(*modifiers),
            Self::MouseMoved { .. } => None,
        }
    }

    /// Cursor moves may be coalesced; everything else is order-significant.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::MouseMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
