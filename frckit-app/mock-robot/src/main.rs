use std::convert::Infallible;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use frckit_core::utils::auto::{AutoRoutines, OptionChooser};
use frckit_core::utils::leds::{color, LedPattern, LedStrip};
use frckit_core::utils::units::{self, Prefix};
use smart_leds_trait::{SmartLedsWrite, RGB8};
use tracing::{error, info, warn};

#[derive(Parser)]
#[clap(version = "1.0")]
struct Opts {
    /// Name of the default autonomous routine
    #[clap(long, default_value = "Main")]
    auto: String,
    /// Number of pixels in the simulated strip
    #[clap(long, default_value_t = 8)]
    leds: usize,
    /// Frames to run before exiting
    #[clap(long, default_value_t = 40)]
    frames: u32,
}

/// Simulated robot command; stands in for the framework's command type.
#[derive(Debug, Clone, PartialEq)]
enum SimCommand {
    DriveForward { meters: f64 },
    Balance,
    Idle,
}

/// Dashboard chooser that logs its entries to the console.
#[derive(Default)]
struct ConsoleChooser {
    entries: Vec<(String, SimCommand)>,
}

impl OptionChooser for ConsoleChooser {
    type Command = SimCommand;

    fn set_default(&mut self, name: &str, command: SimCommand) {
        info!(%name, ?command, "chooser default");
        self.entries.push((name.to_string(), command));
    }

    fn add_option(&mut self, name: &str, command: SimCommand) {
        info!(%name, ?command, "chooser option");
        self.entries.push((name.to_string(), command));
    }
}

/// LED driver that logs each frame to the console.
struct ConsoleLedDriver;

impl SmartLedsWrite for ConsoleLedDriver {
    type Color = RGB8;
    type Error = Infallible;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let frame: Vec<RGB8> = iterator.into_iter().map(Into::into).collect();
        info!(?frame, "LED frame");
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let opts: Opts = Opts::parse();

    let mut routines: AutoRoutines<ConsoleChooser> = AutoRoutines::new(opts.auto.as_str());
    routines.register("Main", || SimCommand::DriveForward { meters: 2.0 });
    routines.register("Balance", || SimCommand::Balance);
    routines.register("DoNothing", || SimCommand::Idle);

    match routines.chooser() {
        Ok(chooser) => info!(entries = chooser.entries.len(), "dashboard chooser ready"),
        Err(e) => {
            error!(error = %e, "failed to build the autonomous chooser");
            return;
        }
    }

    match routines.resolve(&opts.auto) {
        Ok(command) => info!(?command, "autonomous selection"),
        Err(e) => warn!(error = %e, "no autonomous routine selected"),
    }

    let mm = Prefix::milli().of(&units::meter());
    info!(symbol = %mm, scale = mm.value(), "telemetry distance unit");

    let mut strip = LedStrip::new(ConsoleLedDriver, opts.leds);
    strip.set_pattern(LedPattern::dynamic(|index, elapsed| {
        let hue = elapsed * 0.25 + index as f32 * 0.04;
        color::hsv(hue.fract(), 1.0, 0.6)
    }));

    let start = Instant::now();
    for _ in 0..opts.frames {
        if let Err(e) = strip.tick(start.elapsed().as_secs_f32()) {
            error!("LED frame failed: {:?}", e);
        }
        thread::sleep(Duration::from_millis(50));
    }
}
