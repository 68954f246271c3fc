use nbody::{Engine, Format, ScenarioConfig, Vec3, G_STANDARD};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "nbody", about = "Direct-sum N-body gravity simulator")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every body stored in a state file
    List {
        file: PathBuf,
    },
    /// Add a body to a state file, creating it if needed
    Add {
        file: PathBuf,
        #[arg(long)]
        id: String,
        /// Mass in kg
        #[arg(long)]
        mass: f64,
        /// Position in m
        #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
        pos: Vec<f64>,
        /// Velocity in m/s
        #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
        vel: Vec<f64>,
    },
    /// Advance a state file by one or more steps
    Step {
        file: PathBuf,
        /// Step size in seconds
        #[arg(long)]
        dt: f64,
        #[arg(long, default_value_t = 1)]
        steps: usize,
        /// Gravitational constant
        #[arg(long = "g", default_value_t = G_STANDARD)]
        g: f64,
        /// Where to write the result (defaults to `file`)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run a YAML scenario
    Run {
        scenario: PathBuf,
        /// Save the final state here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Re-save a state file in the other format
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
}

// format comes from the extension: .json or table
fn load_engine(path: &Path, g: f64) -> Result<Engine> {
    let mut engine = Engine::with_gravity(g);
    engine
        .load(path, Format::from_path(path))
        .with_context(|| format!("failed to load '{}'", path.display()))?;
    Ok(engine)
}

fn save_engine(engine: &Engine, path: &Path) -> Result<()> {
    let format = Format::from_path(path);
    let written = engine
        .save(path, format)
        .with_context(|| format!("failed to save '{}'", path.display()))?;
    if written == 0 {
        println!("No bodies to save.");
    } else {
        println!("Saved {written} bodies to '{}' ({format}).", path.display());
    }
    Ok(())
}

fn list(engine: &Engine) {
    if engine.is_empty() {
        println!("No bodies registered in the simulator.");
        return;
    }
    println!("--- Bodies ---");
    for (i, body) in engine.list_bodies().enumerate() {
        println!("{}. {}", i + 1, body);
    }
}

fn run_steps(engine: &mut Engine, dt: f64, steps: usize) -> Result<()> {
    if !(dt > 0.0) {
        bail!("time step must be positive, got {dt}");
    }
    for n in 1..=steps {
        let diagnostics = engine.step(dt);
        println!("--- Step {n} (dt = {dt} s) ---");
        println!("{diagnostics}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::List { file } => {
            let engine = load_engine(&file, G_STANDARD)?;
            list(&engine);
        }
        Commands::Add { file, id, mass, pos, vel } => {
            let mut engine = if file.exists() {
                load_engine(&file, G_STANDARD)?
            } else {
                Engine::new()
            };
            engine.add_body(&id, mass, Vec3::from_slice(&pos)?, Vec3::from_slice(&vel)?)?;
            save_engine(&engine, &file)?;
        }
        Commands::Step { file, dt, steps, g, out } => {
            let mut engine = load_engine(&file, g)?;
            run_steps(&mut engine, dt, steps)?;
            save_engine(&engine, out.as_deref().unwrap_or(&file))?;
        }
        Commands::Run { scenario, out } => {
            let cfg = ScenarioConfig::from_path(&scenario)
                .with_context(|| format!("failed to read scenario '{}'", scenario.display()))?;
            let mut engine = cfg.build_engine()?;
            run_steps(&mut engine, cfg.parameters.h0, cfg.parameters.steps)?;
            list(&engine);
            if let Some(out) = out {
                save_engine(&engine, &out)?;
            }
        }
        Commands::Convert { input, output } => {
            let engine = load_engine(&input, G_STANDARD)?;
            save_engine(&engine, &output)?;
        }
    }

    Ok(())
}
