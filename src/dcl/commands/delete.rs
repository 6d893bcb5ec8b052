use std::fs;
use std::path::PathBuf;

use crate::commands::helpers::{attempt, confirmed, log_step, skipped};
use crate::commands::{CmdResult, Confirm};
use crate::error::{DclError, Result};
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

/// Deletes every file spec given; there is no destination for `delete`.
pub fn run(specs: &FileSpecs, opts: &EffectiveOptions, confirm: &mut dyn Confirm) -> Result<CmdResult> {
    let targets: Vec<PathBuf> = specs.all().into_iter().map(PathBuf::from).collect();
    if targets.is_empty() {
        return Err(DclError::missing("delete", "at least one file spec"));
    }

    let mut result = CmdResult::default();
    for path in targets {
        if !confirmed(confirm, opts, &format!("delete {}?", path.display()))? {
            skipped(&mut result, path.display());
            continue;
        }
        if !opts.noop {
            attempt(&mut result, &path, || fs::remove_file(&path))?;
        }
        log_step(&mut result, opts, "deleted", format!("{} deleted", path.display()));
    }

    Ok(result)
}
