use clap::Parser;
use log::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tower_cover::constants::DEFAULT_SEED;
use tower_cover::*;

/// Solve a tower placement instance.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The instance file to read. Use - for stdin.
    input: String,

    /// The file to write the solution to. Use - for stdout.
    #[arg(default_value = "-")]
    output: String,

    /// The solver to run.
    #[arg(long, value_parser = SOLVER_NAMES)]
    solver: String,

    /// Points scored each greedy round: cities or grid.
    #[arg(long, default_value = "cities")]
    candidates: CandidateUniverse,

    /// Tie-break between equally good points: first or random.
    #[arg(long, default_value = "first")]
    tie_break: TieBreak,

    /// Seed for the random tie-break.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Log more (repeat for trace output).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Writes log records to stderr.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: u8) -> Result<(), SetLoggerError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

fn read_instance(path: &str) -> Result<Instance, InstanceError> {
    if path == "-" {
        Instance::read(io::stdin().lock())
    } else {
        Instance::read(File::open(path)?)
    }
}

fn open_output(path: &str) -> io::Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(io::stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let instance = read_instance(&args.input)?;
    info!(
        "Read instance: {} cities, D={}, R_s={}, R_p={}",
        instance.cities().len(),
        instance.grid_side_length(),
        instance.coverage_radius(),
        instance.penalty_radius()
    );

    let solver = SolverBuilder::new()
        .candidates(args.candidates)
        .tie_break(args.tie_break)
        .seed(args.seed)
        .build(&args.solver)?;

    let solution = solver.solve(&instance);
    solution.validate()?;
    info!(
        "Solver '{}' placed {} towers, penalty {:.3}",
        solver.name(),
        solution.towers().len(),
        solution.penalty()
    );

    let mut out = open_output(&args.output)?;
    solution.write_text(&mut out)?;
    out.flush()?;

    Ok(())
}
