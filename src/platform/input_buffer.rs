//=========================================================================
// Input Buffer
//
// Holds the input received between two redraws on the platform thread.
// Key and button events keep their order; cursor moves collapse into the
// latest position.
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

#[derive(Debug)]
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_CAPACITY: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_CAPACITY),
            cursor: None,
        }
    }

    /// Keeps only the latest cursor move.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.cursor = Some(event);
    }

    /// Appends a key or button event; an exact repeat of the previous
    /// event (OS key repeat) is dropped.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Takes everything buffered as `(discrete, continuous)`, or `None`
    /// when nothing arrived.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.cursor.take().into_iter().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.cursor.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
