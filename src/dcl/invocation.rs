//! The invocation identity: which name the process was started under.
//!
//! The name is captured once, at process start, into an [`InvocationContext`]
//! and passed around as a value from there on.

use std::ffi::OsStr;
use std::path::Path;

use crate::options::GlobalOptions;

/// Everything one invocation is driven by. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    invoked_name: String,
    raw_args: Vec<String>,
    global_options: GlobalOptions,
}

impl InvocationContext {
    /// `argv0` is the program path as invoked (not the resolved executable).
    pub fn new(argv0: impl AsRef<OsStr>, raw_args: Vec<String>, global_options: GlobalOptions) -> Self {
        Self {
            invoked_name: invoked_name(argv0.as_ref()),
            raw_args,
            global_options,
        }
    }

    pub fn invoked_name(&self) -> &str {
        &self.invoked_name
    }

    pub fn raw_args(&self) -> &[String] {
        &self.raw_args
    }

    pub fn global_options(&self) -> &GlobalOptions {
        &self.global_options
    }
}

/// Normalizes an invocation path into a dispatch key: directory components
/// stripped, lower-cased.
pub fn invoked_name(argv0: &OsStr) -> String {
    Path::new(argv0)
        .file_name()
        .unwrap_or(argv0)
        .to_string_lossy()
        .to_lowercase()
}
