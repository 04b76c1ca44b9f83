//! Sage Runner
//!
//! Opens a window and plays a scene file, or with `--headless` ticks it a
//! fixed number of times and prints what would be drawn.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use sage_engine::core::runtime::{Runtime, RuntimeConfig};
use sage_engine::EngineBuilder;

/// Sage Runner - play a scene or world file
#[derive(Parser, Debug)]
#[command(name = "sage-run")]
#[command(about = "Load a scene file and run it in a window or headless")]
struct Args {
    /// Scene to start with, relative to the resource root (.sgw worlds or object files)
    scene: PathBuf,

    /// Directory resource paths are resolved against
    #[arg(long, short = 'r', default_value = ".")]
    resources: PathBuf,

    /// Logic ticks per second
    #[arg(long, default_value_t = 60.0)]
    tps: f64,

    /// Tick with a fixed 1/TPS step instead of measured time
    #[arg(long)]
    fixed_step: bool,

    /// Window title
    #[arg(long, default_value = "Sage Engine")]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Run without a window for `--ticks` ticks
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 1)]
    ticks: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.tps <= 0.0 {
        error!("--tps must be positive, got {}", args.tps);
        return ExitCode::FAILURE;
    }

    let result = if args.headless {
        run_headless(&args)
    } else {
        EngineBuilder::new()
            .with_tps(args.tps)
            .with_resource_root(&args.resources)
            .with_internal_clock(!args.fixed_step)
            .with_window_title(&args.title)
            .with_window_size(args.width.max(1), args.height.max(1))
            .with_startup_scene(&args.scene)
            .build()
            .run()
            .map_err(|e| e.to_string())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run_headless(args: &Args) -> Result<(), String> {
    let mut runtime = Runtime::new(RuntimeConfig::new(&args.resources).with_internal_clock(false));

    runtime.load_scene(&args.scene).map_err(|e| e.to_string())?;

    let step = (1.0 / args.tps) as f32;
    for _ in 0..args.ticks {
        runtime.tick(step);
    }

    info!("{} objects after {} ticks", runtime.len(), runtime.ticks());
    for command in runtime.draw_list() {
        println!(
            "z={:>4} owner={} at ({:.1}, {:.1}) {:?}",
            command.z_index, command.owner, command.position.x, command.position.y, command.source
        );
    }
    Ok(())
}
