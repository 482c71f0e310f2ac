use std::{
    fs,
    io::{self, BufRead, Write},
};

use ami::interpreter::evaluator::core::Context;
use clap::Parser;

/// ami is an easy to use, domain-specific programming language for numeric
/// mathematics.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ami to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// An inline script, or a file path with `--file`. When omitted, ami
    /// starts an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut context = Context::new();

    let Some(contents) = args.contents else {
        repl(&mut context);
        return;
    };

    let (label, script) = if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });
        (contents, script)
    } else {
        ("script".to_string(), contents)
    };

    match context.eval_source(&script, &label) {
        Ok(value) => println!("{value}"),
        Err(report) => {
            eprintln!("{report}");
            std::process::exit(1);
        },
    }
}

/// Runs a read-eval-print loop on standard input.
///
/// The context persists across lines, so variables and functions defined in
/// one input stay available in the next. `exit` or end of input leaves the
/// loop.
fn repl(context: &mut Context) {
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }
        if line.trim() == "exit" {
            return;
        }

        match context.eval_source(&line, "repl") {
            Ok(value) => println!("{value}"),
            Err(report) => eprintln!("{report}"),
        }
    }
}
