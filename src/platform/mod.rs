//=========================================================================
// Platform Subsystem
//
// Owns the OS window on the main thread and forwards its input to the
// logic thread.
//
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  EventCollector  │
//  │   ↓                      │    │   ↓              │
//  │  InputProcessor          │    │  InputState      │
//  │   ↓                      │    │   ↓              │
//  │  InputBuffer             │    │  Runtime::tick   │
//  │   ↓ (RedrawRequested)    │    └──────────────────┘
//  │  crossbeam Sender ───────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// A redraw is the frame boundary: everything buffered since the previous
// one is sent as a single `PlatformEvent::Inputs`. Empty frames send
// nothing. If the logic thread is gone the platform keeps running so the
// window can still be closed.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

/// Title and logical size of the engine window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: String::from("Sage Engine"),
            width: 800,
            height: 600,
        }
    }
}

//=== Platform ============================================================

/// Window manager and input aggregator. Not `Send`; it stays on the
/// thread that called `Engine::run`.
pub(crate) struct Platform {
    settings: WindowSettings,

    /// Created lazily in `resumed()`.
    window: Option<Window>,

    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(settings: WindowSettings, event_sender: Sender<PlatformEvent>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            settings,
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the event loop cannot be created or
    /// stops abnormally.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends the buffered input to the logic thread. A disconnected
    /// channel drops the events with a warning.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };
        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self
            .event_sender
            .send(PlatformEvent::Inputs { discrete, continuous })
            .is_err()
        {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                discrete_count + continuous_count
            );
        }
    }

    fn window_attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists");
            return;
        }

        match event_loop.create_window(self.window_attributes()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window `{}` created: {}x{} @ {}x DPI",
                    self.settings.title,
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", modifiers);
                self.input_processor.update_modifiers(modifiers.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.cursor_moved(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.key_event(key_event) {
                    Some(event) => self.buffer.push_discrete(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode, Modifiers};
    use crossbeam_channel::unbounded;

    fn space() -> InputEvent {
        InputEvent::KeyDown {
            key: KeyCode::Space,
            modifiers: Modifiers::empty(),
        }
    }

    #[test]
    fn window_is_created_lazily() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(WindowSettings::default(), tx);
        assert!(platform.window().is_none());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(WindowSettings::default(), tx);

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_events_once() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(WindowSettings::default(), tx);
        platform.buffer.push_discrete(space());

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete, [space()]);
                assert!(continuous.is_empty());
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_survives_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(WindowSettings::default(), tx);
        platform.buffer.push_discrete(space());
        drop(rx);

        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn default_window_settings() {
        let settings = WindowSettings::default();
        assert_eq!(settings.title, "Sage Engine");
        assert_eq!((settings.width, settings.height), (800, 600));
    }
}
