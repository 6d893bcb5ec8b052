use std::fs;

use crate::commands::helpers::{
    attempt, confirmed, log_step, resolve_targets, skipped, sources_and_destination,
};
use crate::commands::{CmdResult, Confirm};
use crate::error::Result;
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

pub fn run(specs: &FileSpecs, opts: &EffectiveOptions, confirm: &mut dyn Confirm) -> Result<CmdResult> {
    let (sources, dest) = sources_and_destination("rename", specs)?;
    let targets = resolve_targets("rename", &sources, &dest)?;
    let mut result = CmdResult::default();

    for (src, dst) in targets {
        if !confirmed(confirm, opts, &format!("rename {} to {}?", src.display(), dst.display()))? {
            skipped(&mut result, src.display());
            continue;
        }
        if !opts.noop {
            attempt(&mut result, &src, || fs::rename(&src, &dst))?;
        }
        log_step(
            &mut result,
            opts,
            "renamed",
            format!("{} renamed to {}", src.display(), dst.display()),
        );
    }

    Ok(result)
}
