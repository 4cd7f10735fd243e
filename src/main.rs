mod logger;

use anyhow::Result;
use clap::Parser;
use log::{info, warn, LevelFilter};
use rpn_calc::{Calculator, TerminalIo};
use std::{
    io::{self, BufRead},
    process::ExitCode,
};

/// RPN calculator with a 20-level stack.
///
/// Interactive keys: digits and `.` type a number, Enter enters it (or
/// repeats the top value), `+ - * /` operate, `n` negates, `s` swaps, `d`
/// drops, `c` clears, Backspace edits, `q` quits.
#[derive(Parser)]
#[command(name = "rpn-calc", version)]
struct Cli {
    /// Read expressions from stdin, one per line, and print the top of the
    /// stack after each.
    #[arg(long)]
    batch: bool,

    /// Diagnostics on stderr: off, error, warn, info, debug or trace.
    /// Defaults to warn in batch mode and off interactively.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.batch {
        LevelFilter::Warn
    } else {
        // stderr is the same terminal we draw on.
        LevelFilter::Off
    };
    logger::init(cli.log_level.unwrap_or(default_level))?;

    if cli.batch {
        run_batch()
    } else {
        run_interactive()?;
        Ok(ExitCode::SUCCESS)
    }
}

fn run_interactive() -> Result<()> {
    // Dropping `io` restores the terminal, including when unwinding.
    let mut io = TerminalIo::setup()?;
    let mut calc: Calculator = Calculator::new();
    calc.run(&mut io)?;
    Ok(())
}

/// The stack carries over from line to line, like one long session.
fn run_batch() -> Result<ExitCode> {
    let mut calc: Calculator = Calculator::new();
    let mut failed = 0;

    for (n, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        match calc.eval_line(&line) {
            Ok(Some(top)) => println!("{top}"),
            Ok(None) => println!("empty"),
            Err(e) => {
                warn!("line {}: {e}", n + 1);
                println!("error: {e}");
                failed += 1;
            }
        }
    }

    info!("done; {failed} line(s) failed, final stack {:?}", calc.stack());
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
