use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};

use u_tspga::ga::{GaConfig, GaRunner};
use u_tspga::tsp::{build_distance_matrix, closed_path, load_points, write_path};

/// Evolve a short closed tour over the points in a coordinate file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Two-row coordinate file: x values on the first row, y on the second
    input: PathBuf,

    /// population size
    #[arg(long, default_value_t = 20)]
    population: usize,

    /// number of generations
    #[arg(long, default_value_t = 10_000)]
    generations: usize,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// log progress every N generations
    #[arg(long, default_value_t = 1_000)]
    log_interval: usize,

    /// write the closed best path (same two-row format) to this file
    #[arg(long)]
    path_out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logger(level: LogLevel) {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    builder.init();
}

fn run(args: &Args) -> u_tspga::Result<()> {
    let points = load_points(&args.input)?;
    let matrix = build_distance_matrix(&points.xs, &points.ys)?;

    let mut config = GaConfig::default()
        .with_population_size(args.population)
        .with_generations(args.generations)
        .with_log_interval(args.log_interval);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    info!("input: {}", args.input.display());
    let result = GaRunner::run(&matrix, &config)?;

    println!("Number of cities: {}", matrix.dimension());
    println!("Population size: {}", result.population.len());
    println!("Best cost: {}", result.best_fitness);

    let tour = result.best.into_tour();
    println!("Best tour: {tour:?}");

    if let Some(out) = &args.path_out {
        let (xs, ys) = closed_path(&tour, &points)?;
        write_path(out, &xs, &ys)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
