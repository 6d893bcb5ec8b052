use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

use crate::commands::helpers::{
    attempt, confirmed, log_step, resolve_targets, skipped, sources_and_destination,
};
use crate::commands::{CmdResult, Confirm};
use crate::error::Result;
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

pub fn run(specs: &FileSpecs, opts: &EffectiveOptions, confirm: &mut dyn Confirm) -> Result<CmdResult> {
    let (sources, dest) = sources_and_destination("copy", specs)?;
    let targets = resolve_targets("copy", &sources, &dest)?;
    let mut result = CmdResult::default();

    for (src, dst) in targets {
        let step = format!("{} copied to {}", src.display(), dst.display());
        if !confirmed(confirm, opts, &format!("copy {} to {}?", src.display(), dst.display()))? {
            skipped(&mut result, src.display());
            continue;
        }
        if !opts.noop {
            attempt(&mut result, &src, || fs::copy(&src, &dst))?;
            if opts.preserve {
                attempt(&mut result, &dst, || preserve_times(&src, &dst))?;
            }
        }
        log_step(&mut result, opts, "copied", step);
    }

    Ok(result)
}

/// `fs::copy` already carries permissions over; this adds the timestamps.
fn preserve_times(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let times = FileTimes::new()
        .set_accessed(meta.accessed()?)
        .set_modified(meta.modified()?);
    File::options().write(true).open(dst)?.set_times(times)?;
    Ok(())
}
