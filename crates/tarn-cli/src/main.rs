use std::io::{self, Read};

use clap::Parser;
use tarn_core::HeightMap;
use tarn_engine::{SimConfig, Simulation};
use tarn_grid::config::{DEFAULT_LENGTH, DEFAULT_MAX_HEIGHT, DEFAULT_WIDTH};
use tarn_grid::render::{render_cubes, render_heightmap, render_water_depths};
use tarn_grid::{parse_grid, random_grid, RandomGridConfig};

use crate::error::CliError;

mod error;

/// Flood a heightmap and report how much water it holds.
///
/// Reads a grid from a file, or generates a random one when no file is
/// given.
#[derive(Parser, Debug)]
#[command(name = "tarn", version, about, long_about = None)]
struct Args {
    /// Heightmap file, one row per line (`-` for stdin).
    #[arg(short, long)]
    file: Option<String>,

    /// Length of a random grid.
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: u32,

    /// Width of a random grid.
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Maximum height of a random grid.
    #[arg(long = "max-height", visible_alias = "mh", default_value_t = DEFAULT_MAX_HEIGHT)]
    max_height: u32,

    /// Seed for the random grid.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Print every cell of the flooded grid.
    #[arg(long)]
    show_cubes: bool,

    /// Prefix printed cells with their coordinates (implies --show-cubes).
    #[arg(long)]
    coords: bool,

    /// Print the water depth of every column.
    #[arg(long)]
    depths: bool,

    /// Check extrusion and resolution invariants after flooding.
    #[arg(long)]
    verify: bool,
}

fn load_heightmap(args: &Args) -> Result<HeightMap, CliError> {
    let Some(path) = &args.file else {
        let config = RandomGridConfig {
            length: args.length,
            width: args.width,
            max_height: args.max_height,
            seed: args.seed,
        };
        return Ok(random_grid(&config)?);
    };
    let read_err = |source: io::Error| CliError::Read {
        path: path.clone(),
        source,
    };
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_err)?
    };
    Ok(parse_grid(&text)?)
}

fn run(args: &Args, map: &HeightMap) -> Result<String, CliError> {
    let config = SimConfig {
        verify: args.verify || SimConfig::default().verify,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(config).map_err(tarn_engine::SimulationError::from)?;
    let outcome = sim.run(map)?;

    let mut out = render_heightmap(map);
    if args.show_cubes || args.coords {
        out.push_str(&render_cubes(&outcome.space, args.coords));
    }
    if args.depths {
        out.push_str(&render_water_depths(&outcome.space));
    }
    let (volume, level) = outcome.stats.summary();
    out.push_str(&format!("total water volume: {volume}\nmax water level: {level}\n"));
    Ok(out)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let map = match load_heightmap(&args) {
        Ok(map) => map,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    log::info!("loaded {}x{} heightmap", map.length(), map.width());

    match run(&args, &map) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
