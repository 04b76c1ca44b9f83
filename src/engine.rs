//=========================================================================
// Sage Engine
//
// Entry point that ties the window to the scene runtime.
//
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [window open]
//         │                          │
//         ├─ with_tps()              ├─ init(setup)
//         ├─ with_channel_capacity() └─ run(): spawns logic thread,
//         ├─ with_resource_root()          runs platform,
//         ├─ with_window_*()               blocks until exit
//         └─ with_startup_scene()
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::runtime::{self, Runtime, RuntimeConfig, SceneError};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowSettings};

//=== EngineError =========================================================

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Setup or the startup scene failed on the logic thread.
    #[error("scene setup failed: {0}")]
    Scene(#[from] SceneError),

    #[error("logic thread panicked")]
    LogicThreadPanicked,
}

//=== EngineBuilder =======================================================

/// Builder for an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0
/// - **Channel capacity**: 128 messages
/// - **Resource root**: `resources`
/// - **Window**: "Sage Engine", 800x600
///
/// # Examples
///
/// ```no_run
/// use sage_engine::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_resource_root("assets")
///     .with_startup_scene("levels/intro.sgw")
///     .build()
///     .run()?;
/// # Ok::<(), sage_engine::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    runtime: RuntimeConfig,
    window: WindowSettings,
    startup_scene: Option<PathBuf>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            runtime: RuntimeConfig::default(),
            window: WindowSettings::default(),
            startup_scene: None,
        }
    }

    /// Sets the logic thread's ticks per second.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the platform → logic channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Directory scene, texture and font paths are resolved against.
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        let internal_clock = self.runtime.internal_clock;
        self.runtime = RuntimeConfig::new(root).with_internal_clock(internal_clock);
        self
    }

    /// `false` ticks with the fixed `1 / TPS` step instead of measured time.
    pub fn with_internal_clock(mut self, internal_clock: bool) -> Self {
        self.runtime.internal_clock = internal_clock;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive");
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Resource-relative scene loaded after setup: a `.sgw` world file or
    /// a single object file.
    pub fn with_startup_scene(mut self, path: impl Into<PathBuf>) -> Self {
        self.startup_scene = Some(path.into());
        self
    }

    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, resources: {})",
            self.tps,
            self.channel_capacity,
            self.runtime.resource_root.path().display()
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.runtime, self.startup_scene),
            window: self.window,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// The running engine: a window on the calling thread and the scene
/// runtime on a logic thread, linked by a bounded channel.
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    window: WindowSettings,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Registers the code run on the logic thread before the startup scene
    /// loads, typically behavior registration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sage_engine::EngineBuilder;
    /// # use sage_engine::core::behavior::Behavior;
    /// struct Spin;
    /// impl Behavior for Spin {}
    ///
    /// EngineBuilder::new()
    ///     .build()
    ///     .init(|runtime| {
    ///         runtime.behaviors_mut().register("Spin", |_| Spin);
    ///         Ok(())
    ///     })
    ///     .run()?;
    /// # Ok::<(), sage_engine::EngineError>(())
    /// ```
    pub fn init<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut Runtime) -> runtime::Result<()> + Send + 'static,
    {
        self.orchestrator.set_setup(Box::new(setup));
        self
    }

    /// Runs until the window closes.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the event loop could not run, else
    /// the logic thread's setup error or panic.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine (TPS: {})", self.tps);

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        let platform = Platform::new(self.window, tx);
        let platform_result = platform.run();
        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        let core_result = match core_handle.join() {
            Ok(result) => result.map_err(EngineError::from),
            Err(_) => {
                error!("Core thread panicked");
                Err(EngineError::LogicThreadPanicked)
            }
        };

        info!("Engine shutdown complete");
        platform_result?;
        core_result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
