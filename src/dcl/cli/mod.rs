//! # CLI Behavior
//!
//! The only place that knows about the terminal, the environment and exit codes.
//!
//! ## Invocation
//!
//! The action comes from the name the binary was invoked under, never from a
//! subcommand: `upcase hello` and `copy a.txt b.txt /LOG` are separate
//! symlinks to the same executable. Run as `dcl` it prints usage.
//!
//! ### Text Input
//!
//! Lexical functions take their text from the trailing arguments, joined with
//! single spaces. With no text arguments one line is read from stdin:
//!
//! - `upcase hello world` prints `HELLO WORLD`
//! - `echo hello | upcase` prints `HELLO`
//!
//! ### Installing
//!
//! `dcl --symlinks` creates (or verifies) one symlink per action in the link
//! directory: `--link-dir`, then `link_dir` from the config file, then the
//! directory holding the executable.
//!
//! ## Module Structure
//!
//! - `commands`: process setup, console wiring, pager
//! - `render`: message and error formatting
//! - `setup`: argument parsing via clap, help text

mod commands;
mod render;
pub mod setup;

pub use commands::run;
pub use render::report_error;
