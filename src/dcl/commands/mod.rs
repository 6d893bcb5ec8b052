//! # File Commands
//!
//! DCL file-operation verbs, each in its own module. Every command has the same
//! contract: it receives the file specs split by the qualifier parser and the
//! blended options, and returns a [`CmdResult`].
//!
//! Commands never write to stdout or stderr themselves. Payload (search hits,
//! directory listings) goes into [`CmdResult::output`]; status goes into
//! [`CmdResult::messages`]. The one interactive concern, `/CONFIRM`, is asked
//! through the [`Confirm`] seam so tests can script the answers.
//!
//! All mutating commands honour `noop` (report only), `verbose` (echo each
//! step) and `confirm` (ask per item).

use crate::error::{DclError, Result};
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;
use crate::symlinks::SymlinkReport;

pub mod copy;
pub mod create;
pub mod delete;
pub mod directory;
pub mod helpers;
pub mod purge;
pub mod rename;
pub mod search;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    /// The severity letter used in `%FACILITY-S-IDENT` lines.
    pub fn severity(&self) -> char {
        match self {
            MessageLevel::Info => 'I',
            MessageLevel::Success => 'S',
            MessageLevel::Warning => 'W',
            MessageLevel::Error => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub ident: &'static str,
    pub content: String,
}

impl CmdMessage {
    pub fn info(ident: &'static str, content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            ident,
            content: content.into(),
        }
    }

    pub fn success(ident: &'static str, content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            ident,
            content: content.into(),
        }
    }

    pub fn warning(ident: &'static str, content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            ident,
            content: content.into(),
        }
    }

    pub fn error(ident: &'static str, content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            ident,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Payload for stdout, written exactly as is.
    pub output: String,
    pub messages: Vec<CmdMessage>,
    pub symlinks: Option<SymlinkReport>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn push_line(&mut self, line: impl AsRef<str>) {
        self.output.push_str(line.as_ref());
        self.output.push('\n');
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_symlinks(mut self, report: SymlinkReport) -> Self {
        self.symlinks = Some(report);
        self
    }
}

/// Answers `/CONFIRM` prompts.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self(prompt))
    }
}

/// Runs the file command registered under `name`.
pub fn run(
    name: &str,
    specs: &FileSpecs,
    opts: &EffectiveOptions,
    confirm: &mut dyn Confirm,
) -> Result<CmdResult> {
    match name {
        "copy" => copy::run(specs, opts, confirm),
        "create" => create::run(specs, opts, confirm),
        "rename" => rename::run(specs, opts, confirm),
        "delete" => delete::run(specs, opts, confirm),
        "purge" => purge::run(specs, opts, confirm),
        "search" => search::run(specs, opts),
        "directory" => directory::run(specs, opts),
        "show" => show::run(specs, opts),
        other => Err(DclError::UnrecognizedAction(other.to_string())),
    }
}
