//! # CLI Layer
//!
//! The only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Reads the environment (argv, config directory, executable path)
//! - Decides what reaches the process exit status
//!
//! `run` parses flags, sets up logging, loads the config, and hands one
//! [`InvocationContext`] to the [`Dispatcher`]. Diagnostics are printed as they
//! are emitted; the stdout payload is written once the action has finished.

use super::render::print_message;
use super::setup::{about_text, parse_cli, usage};
use dcl::commands::{CmdMessage, Confirm};
use dcl::config::DclConfig;
use dcl::dispatch::{Console, Dispatcher, Route};
use dcl::error::Result;
use dcl::invocation::InvocationContext;
use dcl::registry::PROGRAM_NAME;
use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let argv0 = argv
        .first()
        .cloned()
        .unwrap_or_else(|| OsString::from(PROGRAM_NAME));
    let cli = parse_cli(&argv);

    init_tracing(cli.debug);
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    if cli.about {
        println!("{}", about_text());
        return Ok(());
    }

    let config = DclConfig::load(DclConfig::config_dir()?)?;
    let target = canonical_executable()?;
    let link_dir = config.resolve_link_dir(cli.link_dir.as_deref(), &target);
    debug!(target = %target.display(), link_dir = %link_dir.display(), "installation paths");

    let ctx = InvocationContext::new(&argv0, cli.args.clone(), cli.global_options());
    let dispatcher = Dispatcher::new(target, link_dir);
    let mut console = TerminalConsole::new();
    let dispatched = dispatcher.dispatch(&ctx, &mut console)?;

    match dispatched.route {
        Route::Usage => print!("{}", usage()),
        _ => write_output(&dispatched.result.output, dispatched.options.pager, &config)?,
    }
    Ok(())
}

/// `--debug N` picks the default level; `RUST_LOG` overrides it.
fn init_tracing(debug: u8) {
    let level = match debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// The real executable behind whichever symlink we were started through.
fn canonical_executable() -> Result<PathBuf> {
    Ok(std::env::current_exe()?.canonicalize()?)
}

/// Writes the payload exactly as the action produced it.
fn write_output(text: &str, pager: bool, config: &DclConfig) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    if pager && io::stdout().is_terminal() {
        if let Some((program, args)) = config.pager_command() {
            match Command::new(&program).args(&args).stdin(Stdio::piped()).spawn() {
                Ok(mut child) => {
                    if let Some(mut stdin) = child.stdin.take() {
                        // The pager may quit before reading everything.
                        let _ = stdin.write_all(text.as_bytes());
                    }
                    child.wait()?;
                    return Ok(());
                }
                Err(e) => warn!(pager = %program, error = %e, "pager unavailable"),
            }
        }
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

struct TerminalConsole {
    stdin: io::Stdin,
}

impl TerminalConsole {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Confirm for TerminalConsole {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        eprint!("{} [y/N] ", prompt);
        io::stderr().flush()?;
        let mut answer = String::new();
        self.stdin.lock().read_line(&mut answer)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(chomp(&line).to_string()))
    }

    fn emit(&mut self, message: CmdMessage) {
        print_message(&message);
    }
}

fn chomp(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
