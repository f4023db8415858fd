use std::{
    sync::mpsc::TryRecvError,
    time::{Duration, Instant},
};

use pacer_core::{NativeRate, ScaleFactor, SpeedPreset, SystemClock, Throttle, ThrottleConfig};
use structopt::StructOpt;

mod emulator;
mod fps_meter;
mod host;

use emulator::{Region, SimulatedCore};
use fps_meter::FpsMeter;
use host::Command;

#[derive(StructOpt)]
#[structopt(name = "Pacer", about = "Runs an emulated machine at an adjustable speed.")]
struct Opt {
    /// Video standard of the emulated machine (ntsc, pal, dendy).
    #[structopt(short, long, default_value = "ntsc")]
    region: Region,

    /// Native frame rate in Hz, overrides the region.
    #[structopt(long)]
    fps: Option<f64>,

    /// Initial speed as a percentage of native speed.
    #[structopt(short, long)]
    speed: Option<i32>,

    /// Initial speed preset (slowest, slower, normal, faster, fastest).
    #[structopt(short, long)]
    preset: Option<SpeedPreset>,

    /// Stop after this many frames.
    #[structopt(short, long)]
    frames: Option<u64>,

    /// Host time spent emulating each frame, in milliseconds.
    #[structopt(short, long, default_value = "2")]
    work_ms: u64,

    /// Turn on basic logging support.
    #[structopt(short, long)]
    logging: bool,
}

/// Apply a command and print the resulting speed. Returns `false` on quit.
fn handle_command(throttle: &mut Throttle, command: Command) -> bool {
    match command {
        Command::Preset(preset) => {
            if let Some(change) = throttle.set_preset(Some(preset)) {
                println!("{}", change);
            }
        }

        Command::Percent(percent) => match throttle.set_speed_percent(percent) {
            Ok(change) => println!("{}", change),
            Err(err) => log::warn!("{}", err),
        },

        Command::Quit => return false,
    }

    true
}

/// Start running the emulator.
pub fn main() {
    // Parse command line arguments.
    let opts: Opt = Opt::from_args();

    // Setup logging.
    if opts.logging {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    let rate = match opts.fps {
        Some(hz) => NativeRate::from_hz(hz),
        None => opts.region.native_rate(),
    };

    let mut core = SimulatedCore::new(rate, Duration::from_millis(opts.work_ms));

    let config = ThrottleConfig {
        native_rate: core.desired_rate(),
        initial_scale: ScaleFactor::NORMAL,
    };

    let mut throttle = Throttle::with_config(config, SystemClock::new());

    if let Some(percent) = opts.speed {
        handle_command(&mut throttle, Command::Percent(percent));
    }

    if let Some(preset) = opts.preset {
        handle_command(&mut throttle, Command::Preset(preset));
    }

    log::info!(
        "Running at {} with a {} ms frame budget",
        throttle.native_rate(),
        throttle.budget().millis()
    );

    let commands = host::spawn_command_reader();
    let mut meter = FpsMeter::new(Instant::now());

    'main: loop {
        // Handle user input between pacing slices.
        loop {
            match commands.try_recv() {
                Ok(command) => {
                    if !handle_command(&mut throttle, command) {
                        break 'main;
                    }
                }

                Err(TryRecvError::Empty) => break,

                // End of input only stops an unbounded run.
                Err(TryRecvError::Disconnected) => {
                    if opts.frames.is_none() {
                        break 'main;
                    }

                    break;
                }
            }
        }

        if !throttle.advance().is_complete() {
            continue;
        }

        // Execute one frame's worth of emulation.
        core.execute_frame();
        throttle.set_native_rate(core.desired_rate());

        let now = Instant::now();
        meter.update(now);

        if let Some(fps) = meter.poll(now) {
            log::info!(
                "{:.1} fps ({:.1}% of native{})",
                fps,
                fps / throttle.native_rate().hz() * 100.0,
                if throttle.max_speed() { ", unthrottled" } else { "" }
            );
        }

        if Some(core.frame_count()) == opts.frames {
            break;
        }
    }

    log::info!("Emulated {} frames", core.frame_count());
}
