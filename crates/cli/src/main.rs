use anyhow::{anyhow, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};
use tess::{hex_range, line, timed, Basis, BasisConfig, Hex, HexTop, Point};

/// CLI for hex grid coordinate math via the Tess toolkit. Every command
/// prints its result as JSON.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "tess",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the basis to use. Supported
    /// formats: JSON, TOML. Any other basis options given on the command
    /// line override values from this file
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// X position of the center of hex (0, 0), in screen space
    #[structopt(long)]
    origin_x: Option<f64>,

    /// Y position of the center of hex (0, 0), in screen space
    #[structopt(long)]
    origin_y: Option<f64>,

    /// Distance from the center of a hex to any of its vertices, in screen
    /// space
    #[structopt(long)]
    unit_size: Option<f64>,

    /// Hex orientation. Supported values: pointed, flat
    #[structopt(long)]
    top: Option<HexTop>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Get the screen position of the center of a hex
    Pixel { q: i64, r: i64 },

    /// Convert a screen position to hex space
    Hex {
        x: f64,
        y: f64,
        /// Round the result to the hex that contains the position
        #[structopt(long)]
        round: bool,
    },

    /// Get the screen positions of the 6 vertices of a hex, in drawing order
    Vertices { q: i64, r: i64 },

    /// Get every hex within some distance of a center hex, sorted by (q, r)
    Range { q: i64, r: i64, radius: i64 },

    /// Get the hexes along a line between two hexes, in order
    Line { q1: i64, r1: i64, q2: i64, r2: i64 },

    /// Print the effective basis config, in TOML format
    Config,
}

fn load_config(config_path: &Path) -> anyhow::Result<BasisConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Build the basis config from the config file (if any), then apply
/// overrides from the command line
fn build_config(opt: &Opt) -> anyhow::Result<BasisConfig> {
    let mut config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded config from {:?}", config_path);
            config
        }
        None => BasisConfig::default(),
    };

    if let Some(origin_x) = opt.origin_x {
        config.origin_x = origin_x;
    }
    if let Some(origin_y) = opt.origin_y {
        config.origin_y = origin_y;
    }
    if let Some(unit_size) = opt.unit_size {
        config.unit_size = unit_size;
    }
    if let Some(top) = opt.top {
        config.top = top;
    }
    Ok(config)
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string(value).context("error serializing output")
}

/// Evaluate a command against a basis, and serialize the result
fn run_command(
    basis: &Basis<f64>,
    command: &Command,
) -> anyhow::Result<String> {
    match *command {
        Command::Pixel { q, r } => {
            let pixel: Point<i64> = basis.pixel(Hex::new_qr(q, r));
            to_json(&pixel)
        }
        Command::Hex { x, y, round } => {
            let point = Point::new(x, y)?;
            if round {
                let hex: Hex<i64> = basis.hex_at(point);
                to_json(&hex)
            } else {
                to_json(&basis.hex(point))
            }
        }
        Command::Vertices { q, r } => {
            let vertices: [Point<i64>; 6] =
                basis.vertices(Hex::new_qr(q, r));
            to_json(&vertices)
        }
        Command::Range { q, r, radius } => {
            let mut hexes: Vec<Hex<i64>> =
                hex_range(Hex::new_qr(q, r), radius)?.into_iter().collect();
            hexes.sort_unstable_by_key(|hex| (hex.q(), hex.r()));
            to_json(&hexes)
        }
        Command::Line { q1, r1, q2, r2 } => {
            let hexes: Vec<Hex<i64>> =
                line(Hex::new_qr(q1, r1), Hex::new_qr(q2, r2)).collect();
            to_json(&hexes)
        }
        Command::Config => toml::to_string_pretty(&basis.config())
            .context("error serializing config"),
    }
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = build_config(&opt)?;
    let basis = Basis::from_config(&config)?;
    let output = timed!(
        format!("Evaluating {:?}", opt.command),
        log::Level::Info,
        run_command(&basis, &opt.command)?
    );
    println!("{}", output);

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
