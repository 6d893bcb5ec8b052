//! # Dispatcher
//!
//! Turns one [`InvocationContext`] into one routed action. The invoked name is
//! the only thing that selects behaviour; flags never change the route except
//! the maintenance flag, which always wins:
//!
//! ```text
//! Start ─▶ NameResolved ─┬─▶ Maintenance       (--symlinks, any name)
//!                        ├─▶ FileCommand       (name in FILE_COMMANDS)
//!                        ├─▶ LexicalFunction   (name in LEXICAL_FUNCTIONS)
//!                        ├─▶ Usage             (the dispatcher's own name)
//!                        └─▶ Unrecognized      (anything else: an error)
//! ```
//!
//! Like the command layer, the dispatcher never touches the terminal. Input
//! lines, confirmations and diagnostics all go through a [`Console`]; the stdout
//! payload comes back in [`Dispatched::result`].

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::{self, CmdMessage, CmdResult, Confirm};
use crate::error::{DclError, Result};
use crate::invocation::InvocationContext;
use crate::lexical::{self, MAINTENANCE_FUNCTION};
use crate::options::{blend, EffectiveOptions};
use crate::qualifiers::{self, Qualifiers};
use crate::registry::{self, ActionKind, PROGRAM_NAME};
use crate::symlinks::{ensure_symlinks, SymlinkReport};

/// The terminal I/O a dispatch may need.
pub trait Console: Confirm {
    /// One line of standard input without its line terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Writes one diagnostic (never to stdout).
    fn emit(&mut self, message: CmdMessage);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Maintenance,
    FileCommand(String),
    LexicalFunction(String),
    Usage,
    Unrecognized(String),
}

impl Route {
    pub fn resolve(ctx: &InvocationContext) -> Route {
        if ctx.global_options().symlinks {
            return Route::Maintenance;
        }
        let name = ctx.invoked_name();
        match registry::kind_of(name) {
            Some(ActionKind::FileCommand) => Route::FileCommand(name.to_string()),
            Some(ActionKind::LexicalFunction) => Route::LexicalFunction(name.to_string()),
            None if name == PROGRAM_NAME => Route::Usage,
            None => Route::Unrecognized(name.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct Dispatched {
    pub route: Route,
    pub options: EffectiveOptions,
    pub result: CmdResult,
}

pub struct Dispatcher {
    target: PathBuf,
    link_dir: PathBuf,
}

impl Dispatcher {
    /// `target` is the canonical executable every action symlink points at.
    pub fn new(target: PathBuf, link_dir: PathBuf) -> Self {
        Self { target, link_dir }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn link_dir(&self) -> &Path {
        &self.link_dir
    }

    pub fn dispatch<C: Console>(&self, ctx: &InvocationContext, console: &mut C) -> Result<Dispatched> {
        let route = Route::resolve(ctx);
        debug!(invoked = ctx.invoked_name(), ?route, "resolved route");

        let mut options = blend(ctx.global_options(), &Qualifiers::default());
        let result = match &route {
            Route::Maintenance => {
                let names: Vec<&str> = registry::all_names().collect();
                self.maintain(&names, &options, console)
            }
            Route::FileCommand(name) => {
                let parsed = qualifiers::parse(ctx.raw_args());
                options = blend(ctx.global_options(), &parsed.qualifiers);
                let specs = parsed.file_specs();
                debug!(?specs, qualifiers = ?parsed.qualifiers, ?options, "file command");

                if options.verbose {
                    console.emit(echo(name, &specs.all(), None));
                }
                let result = match commands::run(name, &specs, &options, console) {
                    Ok(result) => result,
                    Err(e) => {
                        let (completed, cause) = e.take_completed();
                        for message in completed {
                            console.emit(message);
                        }
                        return Err(cause.in_action(name));
                    }
                };
                for message in &result.messages {
                    console.emit(message.clone());
                }
                if options.verbose {
                    console.emit(CmdMessage::info("result", format!("{} completed", name)));
                }
                result
            }
            Route::LexicalFunction(name) if name == MAINTENANCE_FUNCTION => {
                self.maintain(ctx.raw_args(), &options, console)
            }
            Route::LexicalFunction(name) => self.lexical(name, ctx.raw_args(), &options, console)?,
            Route::Usage => CmdResult::default(),
            Route::Unrecognized(name) => return Err(DclError::UnrecognizedAction(name.clone())),
        };

        Ok(Dispatched {
            route,
            options,
            result,
        })
    }

    fn lexical<C: Console>(
        &self,
        name: &str,
        args: &[String],
        options: &EffectiveOptions,
        console: &mut C,
    ) -> Result<CmdResult> {
        let entry = lexical::lookup(name).ok_or_else(|| DclError::UnrecognizedAction(name.to_string()))?;
        let (params, text) = lexical::prepare(entry, args)?;
        let input = match text {
            Some(text) => text,
            None => console
                .read_line()
                .map_err(|e| e.in_action(name))?
                .unwrap_or_default(),
        };
        debug!(name, ?params, input = %input, "lexical function");

        if options.verbose {
            console.emit(echo(name, &params, Some(&input)));
        }
        let output = lexical::run(name, params, input, options).map_err(|e| e.in_action(name))?;
        if options.verbose {
            console.emit(CmdMessage::info("result", format!("'{}'", output)));
        }
        Ok(CmdResult::default().with_output(output))
    }

    /// Symlink maintenance over `names`. Names outside the registry are
    /// reported and skipped; the pass itself always succeeds.
    fn maintain<S: AsRef<str>, C: Console>(
        &self,
        names: &[S],
        options: &EffectiveOptions,
        console: &mut C,
    ) -> CmdResult {
        let (known, unknown): (Vec<&str>, Vec<&str>) = names
            .iter()
            .map(|n| n.as_ref())
            .partition(|n| registry::kind_of(n).is_some());

        for name in unknown {
            console.emit(CmdMessage::error(
                "nosuchact",
                format!("'{}' is not a DCL command or function, no symlink created", name),
            ));
        }

        let report: SymlinkReport = ensure_symlinks(&known, &self.target, &self.link_dir);
        for entry in &report.entries {
            console.emit(entry.to_message());
        }
        if options.verbose {
            console.emit(report.summary_message());
        }
        CmdResult::default().with_symlinks(report)
    }
}

fn echo(name: &str, args: &[String], input: Option<&str>) -> CmdMessage {
    let mut line = format!("$ {}", name);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    if let Some(input) = input {
        line.push_str(&format!(" '{}'", input));
    }
    CmdMessage::info("echo", line)
}
