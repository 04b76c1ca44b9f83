//=========================================================================
// Event Collector
//=========================================================================
//
// Logic-thread side of the platform channel. Each tick drains what the
// platform sent since the previous one, up to a bound, and reports whether
// the logic loop should keep going.
//
//   Receiver<PlatformEvent> → collect_frame() → input batches → TickControl
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

/// Messages handled per tick; the rest wait for the next one.
const MAX_EVENTS_PER_TICK: usize = 100;

//=== TickControl =========================================================

/// Whether the logic loop runs another tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Drains the platform channel once per tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Drains pending platform events, at most `MAX_EVENTS_PER_TICK`.
    ///
    /// Returns `Exit` when the window closed or the platform hung up.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();

        let mut drained = 0;
        for _ in 0..MAX_EVENTS_PER_TICK {
            let event = match self.receiver.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    trace!(target: "platform::input", "Platform channel disconnected");
                    return TickControl::Exit;
                }
            };
            drained += 1;

            match event {
                PlatformEvent::Inputs { discrete, continuous } => {
                    self.input_batches
                        .extend([discrete, continuous].into_iter().filter(|batch| !batch.is_empty()));
                }
                PlatformEvent::WindowClosed => return TickControl::Exit,
            }
        }

        if drained == MAX_EVENTS_PER_TICK {
            warn!(
                target: "platform::input",
                "Event queue backlog: drained {} events this tick",
                drained
            );
        } else if drained > 0 {
            trace!(target: "platform::input", "Collected {} platform events", drained);
        }

        TickControl::Continue
    }

    /// Input batches collected by the last `collect_frame`, in arrival order.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    fn key(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::empty() }
    }

    fn inputs(discrete: Vec<InputEvent>, continuous: Vec<InputEvent>) -> PlatformEvent {
        PlatformEvent::Inputs { discrete, continuous }
    }

    #[test]
    fn quiet_channel_continues_with_no_batches() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn batches_keep_arrival_order_and_skip_empty_halves() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let cursor = InputEvent::MouseMoved { x: 10.0, y: 20.0 };

        tx.send(inputs(vec![key(KeyCode::KeyA)], vec![])).unwrap();
        tx.send(inputs(vec![key(KeyCode::KeyB)], vec![cursor])).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(
            collector.batches(),
            [vec![key(KeyCode::KeyA)], vec![key(KeyCode::KeyB)], vec![cursor]]
        );
    }

    #[test]
    fn each_frame_starts_empty() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(inputs(vec![key(KeyCode::Space)], vec![])).unwrap();
        collector.collect_frame();
        assert_eq!(collector.batches().len(), 1);

        collector.collect_frame();
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn window_close_and_disconnect_exit() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();
        assert_eq!(collector.collect_frame(), TickControl::Exit);

        drop(tx);
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn backlog_is_spread_over_ticks() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        for _ in 0..MAX_EVENTS_PER_TICK + 5 {
            tx.send(inputs(vec![key(KeyCode::KeyW)], vec![])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.batches().len(), MAX_EVENTS_PER_TICK);

        collector.collect_frame();
        assert_eq!(collector.batches().len(), 5);
    }
}
