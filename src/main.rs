use std::{fs, io, process};

use clap::Parser;
use log::LevelFilter;
use rpncalc::{config::Limits, evaluate_expression, evaluate_lines};
use simple_logger::SimpleLogger;

/// rpncalc converts an infix arithmetic expression to postfix, evaluates it and
/// prints a stack-machine listing for it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Only print the numeric result.
    #[arg(short, long)]
    result_only: bool,

    /// Use fixed-size buffers (256 stack entries, 510 postfix tokens).
    #[arg(long)]
    fixed_capacity: bool,

    /// Maximum depth of the operator and operand stacks.
    #[arg(long, value_name = "N")]
    stack_limit: Option<usize>,

    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or a file path with --file. Read from stdin when absent.
    contents: Option<String>,
}

impl Args {
    fn limits(&self) -> Limits {
        let limits = if self.fixed_capacity { Limits::fixed() } else { Limits::default() };
        match self.stack_limit {
            Some(depth) => limits.with_stack_depth(depth),
            None => limits,
        }
    }

    const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(args.log_level()).init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    let limits = args.limits();

    let ok = if args.file {
        let Some(path) = &args.contents else {
            eprintln!("No input file given.");
            process::exit(1);
        };
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                                                  eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                                  process::exit(1);
                                              });
        run_file(&script, &limits, args.result_only)
    } else {
        let expression = match args.contents {
            Some(expression) => expression,
            None => read_expression().unwrap_or_else(|e| {
                                         eprintln!("Error reading input: {e}");
                                         process::exit(1);
                                     }),
        };

        if expression.is_empty() {
            println!("Empty input.");
            return;
        }
        run_expression(&expression, &limits, args.result_only)
    };

    if !ok {
        process::exit(1);
    }
}

/// Prompts on stdout and reads one line from stdin, without its line ending.
fn read_expression() -> io::Result<String> {
    use std::io::Write;

    print!("Enter expression (ex: 3 + 4 * (2 - 1) / 5): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Evaluates one expression and prints its report. Returns `false` on failure.
fn run_expression(expression: &str, limits: &Limits, result_only: bool) -> bool {
    match evaluate_expression(expression, limits) {
        Ok(evaluation) if result_only => {
            println!("{}", evaluation.value);
            true
        },
        Ok(evaluation) => {
            println!("{evaluation}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

/// Evaluates every non-blank line independently. A failing line is reported
/// with its line number and does not stop the lines after it.
fn run_file(script: &str, limits: &Limits, result_only: bool) -> bool {
    let mut ok = true;

    for (line, outcome) in evaluate_lines(script, limits) {
        match outcome {
            Ok(evaluation) if result_only => println!("{}", evaluation.value),
            Ok(evaluation) => println!("{evaluation}\n"),
            Err(e) => {
                eprintln!("Line {line}: {e}");
                ok = false;
            },
        }
    }

    ok
}
