use std::fs::{File, FileTimes};
use std::path::PathBuf;
use std::time::SystemTime;

use crate::commands::helpers::{attempt, confirmed, log_step, skipped};
use crate::commands::{CmdResult, Confirm};
use crate::error::{DclError, Result};
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

/// Creates each file empty, or refreshes its modification time if it exists.
pub fn run(specs: &FileSpecs, opts: &EffectiveOptions, confirm: &mut dyn Confirm) -> Result<CmdResult> {
    let targets: Vec<PathBuf> = specs.all().into_iter().map(PathBuf::from).collect();
    if targets.is_empty() {
        return Err(DclError::missing("create", "at least one file spec"));
    }

    let mut result = CmdResult::default();
    for path in targets {
        let existed = path.exists();
        if !confirmed(confirm, opts, &format!("create {}?", path.display()))? {
            skipped(&mut result, path.display());
            continue;
        }
        if !opts.noop {
            attempt(&mut result, &path, || {
                let file = File::options().create(true).append(true).open(&path)?;
                if existed {
                    file.set_times(FileTimes::new().set_modified(SystemTime::now()))?;
                }
                Ok(())
            })?;
        }
        let step = if existed {
            format!("{} updated", path.display())
        } else {
            format!("{} created", path.display())
        };
        log_step(&mut result, opts, "created", step);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_empty_files() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("new.txt");
        let specs = FileSpecs::from_positionals(&[a.display().to_string()]);
        let mut yes = |_: &str| true;
        run(&specs, &EffectiveOptions::default(), &mut yes).unwrap();
        assert_eq!(fs::read(&a).unwrap().len(), 0);
    }

    #[test]
    fn unwritable_location_names_the_file() {
        let temp = TempDir::new().unwrap();
        let inside_missing_dir = temp.path().join("no-such-dir").join("x.txt");
        let specs = FileSpecs::from_positionals(&[inside_missing_dir.display().to_string()]);
        let mut yes = |_: &str| true;
        let err = run(&specs, &EffectiveOptions::default(), &mut yes).unwrap_err();
        assert!(matches!(err, DclError::File { ref path, .. } if *path == inside_missing_dir));
    }

    #[test]
    fn existing_content_is_kept() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("old.txt");
        fs::write(&a, "keep me").unwrap();
        let specs = FileSpecs::from_positionals(&[a.display().to_string()]);
        let mut yes = |_: &str| true;
        let opts = EffectiveOptions {
            verbose: true,
            ..Default::default()
        };
        let result = run(&specs, &opts, &mut yes).unwrap();
        assert_eq!(fs::read_to_string(&a).unwrap(), "keep me");
        assert!(result.messages[0].content.ends_with("updated"));
    }
}
