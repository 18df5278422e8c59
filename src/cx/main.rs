//! Thin binary for cx: everything user-facing lives in `cli/`, everything else
//! in the library. This file only runs the CLI and turns an error into a
//! message on stderr and a non-zero exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
