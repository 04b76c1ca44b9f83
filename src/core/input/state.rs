//=========================================================================
// Input State
//=========================================================================
//
// Per-tick view of keyboard and mouse state, read by behaviors through
// their context.
//
//   InputEvent batches → apply() → held sets + frame deltas → queries
//
// Tick lifecycle: begin_frame() → apply() → end_frame() → behaviors read
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== External Crates =====================================================

use glam::Vec2;

//=== Internal Modules ====================================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputState ==========================================================

#[derive(Debug, Default)]
pub struct InputState {
    //--- Held across ticks ------------------------------------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: Vec2,
    modifiers: Modifiers,

    //--- Reset every tick -------------------------------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    mouse_delta: Vec2,
    last_mouse_position: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Tick Processing --------------------------------------------------

    /// Clears the previous tick's transitions.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.last_mouse_position = self.mouse_position;
    }

    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            self.apply_event(event);
        }
    }

    pub fn end_frame(&mut self) {
        self.mouse_delta = self.mouse_position - self.last_mouse_position;
    }

    fn apply_event(&mut self, event: &InputEvent) {
        if let Some(modifiers) = event.modifiers() {
            self.modifiers = modifiers;
        }

        match *event {
            InputEvent::KeyDown { key, .. } => {
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            InputEvent::KeyUp { key, .. } => {
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
            InputEvent::MouseButtonDown { button, .. } => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                }
            }
            InputEvent::MouseButtonUp { button, .. } => {
                if self.buttons_down.remove(&button) {
                    self.buttons_released.insert(button);
                }
            }
            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = Vec2::new(x, y);
            }
        }
    }

    //=====================================================================
    // Keyboard
    //=====================================================================

    /// `true` only on the tick the key went down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// `true` only on the tick the key came up.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys_down.iter().copied()
    }

    //=====================================================================
    // Mouse
    //=====================================================================

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Window pixels, top-left origin.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    //=====================================================================
    // Modifiers
    //=====================================================================

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn shift_held(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    pub fn ctrl_held(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    pub fn alt_held(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
