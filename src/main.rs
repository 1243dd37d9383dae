use std::process::ExitCode;

use calc::{
    AngleMode, Config, evaluate_batch, interpreter::evaluator::function::BUILTIN_FUNCTIONS, render,
};
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::Layer,
    prelude::*,
};

/// calc evaluates arithmetic expressions and prints their results.
///
/// Each expression may hold several sub-expressions separated by commas.
/// `$n` refers to the n-th result computed so far.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Consider all angles to be degrees. Results of inverse trigonometric
    /// functions are also in degrees.
    #[arg(short, long)]
    degrees: bool,

    /// Print the results of each expression on a new line instead of
    /// separating them by a space.
    #[arg(short, long)]
    newline: bool,

    /// Log evaluation steps to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expressions to evaluate.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    expressions: Vec<String>,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self { angle_mode: if args.degrees {
                               AngleMode::Degrees
                           } else {
                               AngleMode::Radians
                           },
               newline:    args.newline, }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry().with(Layer::new().with_writer(std::io::stderr)
                                                    .with_target(false)
                                                    .with_filter(Targets::new().with_default(LevelFilter::WARN)
                                                                               .with_target("calc", level)))
                                  .init();
}

fn main() -> ExitCode {
    let command =
        Args::command().after_help(format!("Functions: {}\nSymbols: pi, e",
                                           BUILTIN_FUNCTIONS.join(", ")));
    let args = Args::from_arg_matches(&command.get_matches()).unwrap_or_else(|e| e.exit());

    init_logging(args.verbose);

    let config = Config::from(&args);
    let outcomes = evaluate_batch(&args.expressions, config);

    let mut failed = false;
    for (i, outcome) in outcomes.iter().enumerate() {
        if let Err(e) = outcome {
            eprintln!("calc: expression {}: {e}", i + 1);
            failed = true;
        }
    }

    let output = render(&outcomes, &config);
    if !output.is_empty() {
        println!("{output}");
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
