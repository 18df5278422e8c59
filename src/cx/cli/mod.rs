//! # CLI Layer
//!
//! One possible client of the cx library, and the only code that knows about
//! the terminal: argument parsing, logging setup, colored output and exit codes.
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context wiring and per-command handlers
//! - `render.rs`: turns `CmdResult`s into terminal output
//! - `logging.rs`: tracing subscriber on stderr

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
