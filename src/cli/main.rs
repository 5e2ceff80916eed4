use std::io::BufReader;

use clap::Parser;
use crossterm::style::Stylize;

use tellask::{
    config::{defaults, Config, EntailmentMode},
    context::Context,
    reports::{Decision, Engine},
};

/// Answers a TELL/ASK entailment query with the requested inference engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The TELL/ASK file to read
    file: std::path::PathBuf,

    /// Inference method: TT, FC, BC, or DPLL
    method: String,

    /// Use standard all-rows truth-table entailment instead of the legacy final-row convention
    #[arg(long, default_value_t = false)]
    all_rows: bool,

    /// Choose DPLL branch literals at random
    #[arg(long, default_value_t = false)]
    random_branching: bool,

    /// Seed for the source of randomness
    #[arg(long, default_value_t = defaults::SEED)]
    seed: u64,

    /// Treat a cyclic backward-chaining rule graph as an error rather than as unprovable
    #[arg(long, default_value_t = false)]
    strict_cycles: bool,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let engine: Engine = match args.method.parse() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut config = Config::default();
    if args.all_rows {
        config.entailment = EntailmentMode::AllRows;
    }
    config.random_branching = args.random_branching;
    config.seed = args.seed;
    config.fail_on_cycle = args.strict_cycles;

    let mut the_context = Context::from_config(config);

    let file = match std::fs::File::open(&args.file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("could not open {}: {e}", args.file.display());
            std::process::exit(1);
        }
    };
    if let Err(e) = the_context.read_tell_ask(BufReader::new(file)) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match the_context.infer(engine) {
        Ok(decision @ Decision::Yes(_)) => println!("{}", decision.to_string().green()),
        Ok(decision @ Decision::No) => println!("{}", decision.to_string().red()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
