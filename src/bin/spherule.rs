use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glam::DVec3;

#[derive(Parser, Debug)]
#[command(name = "spherule", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the intro choreography headlessly and report convergence.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input points JSON ({"points": [{"x": ..., "y": ...}, ...]}).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Raw source map image width in pixels.
    #[arg(long, default_value_t = 2048.0)]
    map_width: f64,

    /// Raw source map image height in pixels.
    #[arg(long, default_value_t = 1024.0)]
    map_height: f64,

    /// Globe radius.
    #[arg(long, default_value_t = 200.0)]
    radius: f64,

    /// Print a progress line every N frames.
    #[arg(long, default_value_t = 30)]
    checkpoint: u64,
}

struct MemoryStage {
    positions: Vec<DVec3>,
    opacity: f64,
}

impl spherule::GlobeStage for MemoryStage {
    fn marker_positions(&mut self) -> &mut [DVec3] {
        &mut self.positions
    }

    fn set_surface_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }
}

struct NullControls {
    azimuthal: f64,
    polar: f64,
}

impl spherule::OrbitControls for NullControls {
    fn set_azimuthal_angle(&mut self, radians: f64) {
        self.azimuthal = radians;
    }

    fn set_polar_angle(&mut self, radians: f64) {
        self.polar = radians;
    }

    fn update(&mut self) {}
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open points '{}'", args.in_path.display()))?;
    let dataset = spherule::GeoDataset::from_reader(BufReader::new(f))
        .with_context(|| "load points dataset")?;

    let config = spherule::IntroConfig::new(
        spherule::MapSize::of_image(args.map_width, args.map_height),
        args.radius,
    );
    let mut intro = spherule::Intro::new(config, &dataset.points)?;

    let mut stage = MemoryStage {
        positions: vec![DVec3::ZERO; dataset.len()],
        opacity: 0.0,
    };
    let mut controls = NullControls {
        azimuthal: 0.0,
        polar: 0.0,
    };

    let mut frame = 0u64;
    while !intro.is_settled() {
        intro.tick(&mut stage, &mut controls);
        frame += 1;
        if frame % args.checkpoint == 0 {
            report(frame, &intro, &stage, &controls);
        }
    }
    report(frame, &intro, &stage, &controls);
    println!("settled after {frame} frames");
    Ok(())
}

fn report(frame: u64, intro: &spherule::Intro, stage: &MemoryStage, controls: &NullControls) {
    let converged = stage
        .positions
        .iter()
        .zip(intro.targets())
        .filter(|(p, t)| (**p - **t).length() < 1e-9)
        .count();
    println!(
        "frame {frame:>4}  dots {}/{}  globe {}/{}  converged {converged}/{}  opacity {:.3}  az {:+.3}  pol {:+.3}",
        intro.clock().dots.current,
        intro.clock().dots.total,
        intro.clock().globe.current,
        intro.clock().globe.total,
        stage.positions.len(),
        stage.opacity,
        controls.azimuthal,
        controls.polar,
    );
}
