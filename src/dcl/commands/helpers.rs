use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::{DclError, Result};
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

/// Requires at least one source and a destination.
pub fn sources_and_destination(action: &str, specs: &FileSpecs) -> Result<(Vec<PathBuf>, PathBuf)> {
    if specs.sources.is_empty() {
        return Err(DclError::missing(action, "a source file spec"));
    }
    let dest = specs
        .destination
        .as_ref()
        .ok_or_else(|| DclError::missing(action, "a destination file spec"))?;
    Ok((
        specs.sources.iter().map(PathBuf::from).collect(),
        PathBuf::from(dest),
    ))
}

/// Pairs each source with its final path. With several sources the
/// destination must be an existing directory. No source may resolve to its
/// own target.
pub fn resolve_targets(action: &str, sources: &[PathBuf], dest: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let dest_is_dir = dest.is_dir();
    if sources.len() > 1 && !dest_is_dir {
        return Err(DclError::NotADirectory(dest.to_path_buf()));
    }

    sources
        .iter()
        .map(|src| {
            let target = if dest_is_dir {
                let name = src.file_name().ok_or_else(|| {
                    DclError::invalid(action, format!("{} has no file name", src.display()))
                })?;
                dest.join(name)
            } else {
                dest.to_path_buf()
            };
            if same_file(src, &target) {
                return Err(DclError::invalid(
                    action,
                    format!("{} and {} are the same file", src.display(), target.display()),
                ));
            }
            Ok((src.clone(), target))
        })
        .collect()
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Runs one filesystem step on `path`. A failure names the path and keeps
/// the messages of the steps already done.
pub fn attempt<T>(result: &mut CmdResult, path: &Path, op: impl FnOnce() -> io::Result<T>) -> Result<T> {
    op().map_err(|e| interrupted(result, DclError::file(path, e)))
}

pub fn interrupted(result: &mut CmdResult, cause: DclError) -> DclError {
    if result.messages.is_empty() {
        return cause;
    }
    DclError::Interrupted {
        completed: std::mem::take(&mut result.messages),
        source: Box::new(cause),
    }
}

/// Asks for confirmation only when `/CONFIRM` is in effect.
pub fn confirmed(confirm: &mut dyn Confirm, opts: &EffectiveOptions, prompt: &str) -> Result<bool> {
    if !opts.confirm {
        return Ok(true);
    }
    confirm.confirm(prompt)
}

/// Records one step: a dry-run notice under `noop`, a `/LOG` line under verbose.
pub fn log_step(result: &mut CmdResult, opts: &EffectiveOptions, ident: &'static str, text: String) {
    if opts.noop {
        result.add_message(CmdMessage::info("noop", format!("{} (not executed)", text)));
    } else if opts.verbose {
        result.add_message(CmdMessage::success(ident, text));
    }
}

pub fn skipped(result: &mut CmdResult, what: impl std::fmt::Display) {
    result.add_message(CmdMessage::info("skipped", format!("{} not processed", what)));
}

/// Renders a byte count the way `ls -h` does: 512, 1.1K, 2.2M, ...
pub fn size_human_readable(size: u64) -> String {
    const UNITS: [(u32, char); 5] = [(50, 'P'), (40, 'T'), (30, 'G'), (20, 'M'), (10, 'K')];
    if size >= 1 << 60 {
        return ">1Exa".to_string();
    }
    for (shift, unit) in UNITS {
        let scale = 1u64 << shift;
        if size >= scale {
            return format!("{:.1}{}", size as f64 / scale as f64, unit);
        }
    }
    size.to_string()
}
