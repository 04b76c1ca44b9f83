//=========================================================================
// Core Systems
//
// Everything that runs on the logic thread: the scene runtime and the
// subsystems it is built from. The `CoreSystemsOrchestrator` owns that
// thread and drives the runtime at a fixed tick rate.
//
// ```text
//  parser → blueprint → runtime (objects, components, behaviors)
//                         ↑
//           cache, resources, input, audio
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod any;
pub mod audio;
pub mod behavior;
pub mod blueprint;
pub mod cache;
pub mod components;
pub mod input;
pub mod math;
pub mod object;
pub mod parser;
pub mod platform_bridge;
pub mod resources;
pub mod runtime;

//=== Standard Library Imports ============================================

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{error, info};

//=== Internal Modules ====================================================

use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use runtime::{Runtime, RuntimeConfig, SceneError};

/// User code run once on the logic thread before the first tick.
pub(crate) type SetupFn = Box<dyn FnOnce(&mut Runtime) -> runtime::Result<()> + Send>;

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic thread configuration until it is spawned.
pub(crate) struct CoreSystemsOrchestrator {
    config: RuntimeConfig,
    startup_scene: Option<PathBuf>,
    setup: Option<SetupFn>,
}

impl CoreSystemsOrchestrator {
    pub(crate) fn new(config: RuntimeConfig, startup_scene: Option<PathBuf>) -> Self {
        Self {
            config,
            startup_scene,
            setup: None,
        }
    }

    pub(crate) fn set_setup(&mut self, setup: SetupFn) {
        self.setup = Some(setup);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Each tick:
    //  1. Drains platform events (exit on close or disconnect)
    //  2. Folds the input batches into the runtime's input state
    //  3. Ticks the runtime
    //  4. Sleeps out the rest of the frame
    //
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<Result<(), SceneError>> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut runtime = self.prepare_runtime()?;
            let mut collector = EventCollector::new(receiver);
            let internal_clock = runtime.config().internal_clock;
            let fixed_delta = frame_duration.as_secs_f32();

            info!(target: "runtime", "Logic thread running at {} TPS", tps);

            loop {
                let frame_start = Instant::now();

                if collector.collect_frame() == TickControl::Exit {
                    info!(target: "runtime", "Logic thread exiting after {} ticks", runtime.ticks());
                    break;
                }

                runtime.feed_input(collector.batches());

                if internal_clock {
                    runtime.advance();
                } else {
                    runtime.tick(fixed_delta);
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            Ok(())
        })
    }

    /// Builds the runtime, runs the setup closure and loads the startup
    /// scene.
    fn prepare_runtime(self) -> Result<Runtime, SceneError> {
        let mut runtime = Runtime::new(self.config);

        if let Some(setup) = self.setup {
            setup(&mut runtime).map_err(|e| {
                error!(target: "runtime", "Setup failed: {}", e);
                e
            })?;
        }

        if let Some(scene) = &self.startup_scene {
            runtime.load_scene(scene).map_err(|e| {
                error!(target: "runtime", "Startup scene `{}` failed: {}", scene.display(), e);
                e
            })?;
        }

        Ok(runtime)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
