use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use tally::Session;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ">> ";

/// tally is a small scripting language for numeric expressions with
/// lexically scoped blocks.
///
/// Without a script or a file, tally starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the program from this file instead of the command line.
    #[arg(short, long, conflicts_with = "script")]
    file: Option<PathBuf>,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// An inline program, e.g. `tally "var a = 2 a * 3"`.
    script: Option<String>,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match (&args.file, args.script) {
        (Some(path), _) => Some(fs::read_to_string(path).into_diagnostic()
                                                        .wrap_err_with(|| {
                                                            format!("reading {} failed",
                                                                    path.display())
                                                        })?),
        (None, script) => script,
    };

    let Some(source) = source else {
        return repl();
    };

    match Session::new().run(&source) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }

    Ok(())
}

/// Reads one unit per line until `exit` or end of input. Errors are reported
/// and the session carries on.
fn repl() -> miette::Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        io::stdout().flush().into_diagnostic()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.into_diagnostic().wrap_err("reading standard input failed")?;

        if line.trim() == "exit" {
            break;
        }

        match session.run(&line) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}
