//=========================================================================
// Input Processor
//=========================================================================
//
// Translates winit input into engine `InputEvent`s on the platform thread.
//
//   winit WindowEvent → InputProcessor → InputEvent → InputBuffer
//
// Modifier state arrives in separate `ModifiersChanged` events; the
// processor remembers it and stamps it on every key and button event.
// Keys with no engine equivalent are dropped.
//
//=========================================================================

//=== External Crates =====================================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Modules ====================================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

#[derive(Debug, Default)]
pub(crate) struct InputProcessor {
    modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    #[cfg(test)]
    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    //--- Translation ------------------------------------------------------

    /// `None` for keys the engine does not know.
    pub(crate) fn key_event(&self, event: &KeyEvent) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        match KeyCode::from(code) {
            KeyCode::Unidentified => None,
            key => Some(self.key(key, event.state)),
        }
    }

    pub(crate) fn mouse_button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    pub(crate) fn cursor_moved(&self, x: f64, y: f64) -> InputEvent {
        InputEvent::MouseMoved {
            x: x as f32,
            y: y as f32,
        }
    }

    fn key(&self, key: KeyCode, state: ElementState) -> InputEvent {
        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::SHIFT, state.shift_key());
        modifiers.set(Modifiers::CTRL, state.control_key());
        modifiers.set(Modifiers::ALT, state.alt_key());
        modifiers
    }
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------
            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_are_stamped_on_later_events() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.modifiers(), Modifiers::empty());

        processor.update_modifiers(ModifiersState::SHIFT | ModifiersState::ALT);
        let event = processor.mouse_button(WinitMouseButton::Left, ElementState::Pressed);

        assert_eq!(
            event,
            InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                modifiers: Modifiers::SHIFT | Modifiers::ALT,
            }
        );
    }

    #[test]
    fn key_state_selects_the_variant() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(ModifiersState::CONTROL);

        assert_eq!(
            processor.key(KeyCode::KeyS, ElementState::Released),
            InputEvent::KeyUp {
                key: KeyCode::KeyS,
                modifiers: Modifiers::CTRL,
            }
        );
    }

    #[test]
    fn unknown_keys_map_to_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::KeyQ);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }

    #[test]
    fn cursor_positions_narrow_to_f32() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.cursor_moved(12.5, 40.0),
            InputEvent::MouseMoved { x: 12.5, y: 40.0 }
        );
    }
}
