//! Symfig - renders symmetry diagrams and diffraction images.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glam::DVec2;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use symfig::diffraction::{self, DiffractionConfig, ToneCurve, ToneKind};
use symfig::figures;
use symfig::style::Target;
use symfig::symmetry::{BuiltinGroup, PairCollection};
use symfig::util::colormaps::ColorPalette;

#[derive(Parser, Debug)]
#[command(name = "symfig")]
#[command(about = "Render crystallographic symmetry figures", long_about = None)]
struct Args {
    /// Directory that receives the presentation/ and report/ trees
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every figure and the diffraction series
    All,
    /// Render the presentation figures
    Presentation {
        /// Only render the named figures
        #[arg(long, num_args = 1..)]
        only: Vec<String>,
    },
    /// Render the report figures
    Report {
        /// Only render the named figures
        #[arg(long, num_args = 1..)]
        only: Vec<String>,
    },
    /// Simulate diffraction from a random tiling
    Diffraction(DiffractionArgs),
    /// Print the pair classes and multiplicities of a site
    Pairs(PairsArgs),
    /// List the figures of each target
    List,
}

#[derive(clap::Args, Debug)]
struct PairsArgs {
    /// Symmetry group
    #[arg(value_enum)]
    group: BuiltinGroup,

    /// Fractional coordinates of the site
    #[arg(
        long,
        num_args = 2,
        required = true,
        value_names = ["X", "Y"],
        allow_negative_numbers = true
    )]
    position: Vec<f64>,

    /// Longest lattice translation, in cells, used to pick pair end points
    #[arg(long, default_value_t = 1)]
    reach: i32,
}

#[derive(clap::Args, Debug)]
struct DiffractionArgs {
    /// Tile edge length in pixels
    #[arg(long, default_value_t = 50)]
    unit: usize,

    /// Tiles per side
    #[arg(long, default_value_t = 20)]
    grid: usize,

    /// Number of ordering probabilities between 0.5 and 1
    #[arg(long, default_value_t = 8)]
    steps: usize,

    /// Seed for the random tiling
    #[arg(long)]
    seed: Option<u64>,

    /// Exponent of the power tone curve
    #[arg(long, default_value_t = diffraction::tone::DEFAULT_EXPONENT)]
    exponent: f64,

    /// Tone curve applied to the intensity
    #[arg(long, value_enum, default_value_t = ToneKind::Power)]
    tone: ToneKind,

    /// Palette for all images
    #[arg(long, value_enum)]
    palette: Option<ColorPalette>,
}

impl DiffractionArgs {
    fn to_config(&self) -> DiffractionConfig {
        DiffractionConfig {
            unit: self.unit,
            grid: self.grid,
            steps: self.steps,
            tone: ToneCurve::from_kind(self.tone, self.exponent),
            palette: self.palette,
            seed: self.seed,
            ..DiffractionConfig::default()
        }
    }
}

fn init_logging(log: Option<&Path>) -> Result<()> {
    if let Some(log_path) = log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

fn render(target: Target, only: &[String], out: &Path) -> Result<usize> {
    let written = figures::render_target(target, only, out)
        .with_context(|| format!("Failed to render {target} figures"))?;
    Ok(written.len())
}

fn simulate(config: &DiffractionConfig, out: &Path) -> Result<usize> {
    let written = diffraction::run(config, out).context("Diffraction run failed")?;
    Ok(written.len())
}

fn pairs(args: &PairsArgs) -> Result<()> {
    let &[x, y] = args.position.as_slice() else {
        anyhow::bail!("--position takes exactly two coordinates");
    };
    let group = args
        .group
        .group()
        .with_context(|| format!("Failed to build group {}", args.group))?;
    let collection = PairCollection::new(&group, &[DVec2::new(x, y)], args.reach);
    println!("{collection}");
    Ok(())
}

fn list() {
    for target in Target::ALL {
        println!("{target}:");
        for figure in figures::catalog(target) {
            println!("  {:<10} {}", figure.name, figure.description);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;
    tracing::info!(out = %args.out.display(), "Starting symfig");

    let count = match &args.command {
        Command::All => {
            let mut count = 0;
            for target in Target::ALL {
                count += render(target, &[], &args.out)?;
            }
            count + simulate(&DiffractionConfig::default(), &args.out)?
        }
        Command::Presentation { only } => render(Target::Presentation, only, &args.out)?,
        Command::Report { only } => render(Target::Report, only, &args.out)?,
        Command::Diffraction(diffraction_args) => {
            simulate(&diffraction_args.to_config(), &args.out)?
        }
        Command::Pairs(pairs_args) => {
            pairs(pairs_args)?;
            return Ok(());
        }
        Command::List => {
            list();
            return Ok(());
        }
    };

    println!("Wrote {count} files under {}", args.out.display());
    tracing::info!(count, "symfig finished");
    Ok(())
}
