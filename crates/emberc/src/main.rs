//! The `emberc` binary: parses argv into a `CompilerOptions`, runs the
//! pipeline through lexing, prints diagnostics, and exits with the status
//! spec.md §6 describes — grounded on `oric/src/main.rs`'s hand-rolled
//! `std::env::args()` dispatch (no subcommands here, since this front end
//! exposes a single "compile up to lexing" surface, not `oric`'s
//! run/test/check/compile command set).

use std::io;

use emberc::{build_options, init_logging, parse_args, Pipeline};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(hint) = err.hint() {
                eprintln!("  help: did you mean '{hint}'?");
            }
            return 1;
        }
    };

    if parsed.help {
        print_usage();
        return 0;
    }
    if parsed.version {
        println!("emberc {VERSION}");
        return 0;
    }

    let options = match build_options(&parsed) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    let mut pipeline = match Pipeline::new(options) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    let success = match pipeline.compile_until_lexing() {
        Ok(success) => success,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    let stderr = io::stderr();
    let mut handle = stderr.lock();
    if pipeline.dump_messages(&mut handle).is_err() {
        return 1;
    }

    i32::from(!success || pipeline.metadata().sink().has_error())
}

fn print_usage() {
    println!("emberc — front end for the Ember compiler (decode, preprocess, lex)");
    println!();
    println!("Usage: emberc [options] <input...>");
    println!();
    println!("Options:");
    println!("  --help                      Print this message and exit");
    println!("  --version                   Print version information and exit");
    println!("  -j <n>                      Thread count (0 = auto); -j4, -j=4, -j 4");
    println!("  -o <path>                   Output path; -opath, -o=path, -o path");
    println!("  -D <name>[=<value>]         Define a macro; -DNAME, -DNAME=value, -D NAME");
    println!("  -finput-encoding=<name>     Force an input encoding (utf8, utf16le, ...)");
}
