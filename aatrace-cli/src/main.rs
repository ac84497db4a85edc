use std::fs;
use std::io::{self, Read, Write};

use facet::Facet;
use facet_args as args;

/// Follow an ASCII art pipe map and collect its letters
#[derive(Facet, Debug)]
struct Args {
    /// Map file (reads from stdin if not provided)
    #[facet(default, args::positional)]
    input: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[facet(default, args::named, args::short = 'o')]
    output: Option<String>,
}

fn main() {
    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let input = match &args.input {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("Failed to read stdin: {}", e);
                std::process::exit(1);
            });
            buf
        }
    };

    let trace = match aatrace::trace(&input) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let output = format!("{}\n{}\n", trace.letters, trace.path);

    match &args.output {
        Some(path) => {
            fs::write(path, &output).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            });
        }
        None => {
            io::stdout().write_all(output.as_bytes()).unwrap_or_else(|e| {
                eprintln!("Failed to write stdout: {}", e);
                std::process::exit(1);
            });
        }
    }
}
