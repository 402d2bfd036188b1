//! Command-line front end for the verification harness.
//!
//! This binary provides two modes. It performs:
//! 1. **Test:** Run the built-in suite against the reference core and exit non-zero on any
//!    failing case.
//! 2. **Run:** Load a raw binary at address 0, print its listing, free-run the core for a
//!    number of cycles, and dump the resulting architectural state.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rvharness_core::common::HarnessError;
use rvharness_core::dut::ReferenceCore;
use rvharness_core::sim::loader;
use rvharness_core::verify::suite;
use rvharness_core::{DesignHarness, HarnessConfig, SimulatedCore, TestRunner};

#[derive(Parser, Debug)]
#[command(
    name = "rvharness",
    author,
    version,
    about = "Cycle-accurate bus and clock harness for RTL CPU cores",
    long_about = "Run the randomized instruction suite, or free-run a raw program.\n\nExamples:\n  rvharness test --seed 42\n  rvharness test --filter alu --trials 64\n  rvharness run -p build/all.bin --cycles 200"
)]
struct Cli {
    /// Log every bus transfer and retired instruction (overrides RUST_LOG).
    #[arg(long, global = true)]
    trace: bool,

    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in test suite.
    Test {
        /// Run seed; case i draws from seed + i.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Only run cases whose name contains this text.
        #[arg(short, long)]
        filter: Option<String>,

        /// Randomized trials per case.
        #[arg(short, long)]
        trials: Option<usize>,

        /// Plain report lines without ANSI colour.
        #[arg(long)]
        no_colour: bool,

        /// List case names and exit.
        #[arg(long)]
        list: bool,
    },

    /// Load a raw little-endian binary at address 0 and run it.
    Run {
        /// Program image.
        #[arg(short, long)]
        program: PathBuf,

        /// Cycles to run after reset.
        #[arg(long)]
        cycles: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let result = load_config(cli.config.as_ref()).and_then(|config| match cli.command {
        Commands::Test {
            seed,
            filter,
            trials,
            no_colour,
            list,
        } => {
            let config = HarnessConfig {
                seed: seed.or(config.seed),
                filter: filter.or(config.filter),
                trials: trials.unwrap_or(config.trials),
                colour: config.colour && !no_colour,
                ..config
            };
            cmd_test(config, list)
        }
        Commands::Run { program, cycles } => {
            let cycles = cycles.unwrap_or(config.max_cycles);
            cmd_run(&config, &program, cycles)
        }
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<HarnessConfig, HarnessError> {
    path.map_or_else(|| Ok(HarnessConfig::default()), HarnessConfig::from_file)
}

/// Runs the suite and maps "every case passed" to the exit status.
fn cmd_test(config: HarnessConfig, list: bool) -> Result<ExitCode, HarnessError> {
    let trials = config.trials;
    let mut runner = TestRunner::<ReferenceCore>::with_default_core(config);
    let _ = runner.extend(suite::cases(trials));

    if list {
        for case in runner.cases() {
            println!("{}", case.name());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let summary = runner.run()?;
    println!("seed: {} (rerun with --seed {})", summary.seed, summary.seed);
    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Loads `program`, prints its listing, runs `cycles` cycles, and dumps the core state.
fn cmd_run(
    config: &HarnessConfig,
    program: &Path,
    cycles: u64,
) -> Result<ExitCode, HarnessError> {
    let words = loader::load_program(program)?;
    let mut sim = DesignHarness::from_config(ReferenceCore::new(), config)?;

    println!("Loading program: {}", program.display());
    for (i, &word) in words.iter().enumerate() {
        println!("{:#06x}: {word:08x}  {}", i * 4, sim.disassemble(word));
    }
    loader::load_into(&mut sim, &words);

    sim.reset();
    sim.do_cycles(cycles);
    info!(cycles = sim.cycle_count(), "run finished");

    let core = sim.core();
    println!();
    println!(
        "pc={:#010x}  retired={}  halted={}  cycles={}",
        core.read_program_counter(),
        core.retired(),
        core.is_halted(),
        cycles
    );
    print!("{}", core.registers());
    Ok(ExitCode::SUCCESS)
}
