use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::helpers::{attempt, confirmed, log_step, skipped};
use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

const BACKUP_SUFFIXES: &[&str] = &["~", ".bak"];

fn is_leftover(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .is_some_and(|n| BACKUP_SUFFIXES.iter().any(|s| n.len() > s.len() && n.ends_with(s)))
}

/// Removes editor backups and `.bak` leftovers from each directory given
/// (the current directory by default). Subdirectories are not descended.
pub fn run(specs: &FileSpecs, opts: &EffectiveOptions, confirm: &mut dyn Confirm) -> Result<CmdResult> {
    let mut dirs: Vec<PathBuf> = specs.all().into_iter().map(PathBuf::from).collect();
    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    let mut result = CmdResult::default();
    let mut purged = 0usize;
    for dir in dirs {
        let mut leftovers: Vec<PathBuf> = attempt(&mut result, &dir, || fs::read_dir(&dir))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && is_leftover(p))
            .collect();
        leftovers.sort();

        for path in leftovers {
            if !confirmed(confirm, opts, &format!("purge {}?", path.display()))? {
                skipped(&mut result, path.display());
                continue;
            }
            if !opts.noop {
                attempt(&mut result, &path, || fs::remove_file(&path))?;
            }
            purged += 1;
            log_step(&mut result, opts, "purged", format!("{} purged", path.display()));
        }
    }

    if purged == 0 {
        result.add_message(CmdMessage::info("nofiles", "no files purged"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_only_leftovers() {
        let temp = TempDir::new().unwrap();
        for name in ["notes.txt", "notes.txt~", "data.bak", "~", "keep.bakery"] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let specs = FileSpecs::from_positionals(&[temp.path().display().to_string()]);
        let mut yes = |_: &str| true;
        run(&specs, &EffectiveOptions::default(), &mut yes).unwrap();

        assert!(temp.path().join("notes.txt").exists());
        assert!(!temp.path().join("notes.txt~").exists());
        assert!(!temp.path().join("data.bak").exists());
        assert!(temp.path().join("~").exists());
        assert!(temp.path().join("keep.bakery").exists());
    }

    #[test]
    fn missing_directory_is_named() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("gone");
        let specs = FileSpecs::from_positionals(&[gone.display().to_string()]);
        let mut yes = |_: &str| true;
        let err = run(&specs, &EffectiveOptions::default(), &mut yes).unwrap_err();
        assert!(err.to_string().starts_with(&gone.display().to_string()));
    }

    #[test]
    fn reports_when_nothing_to_purge() {
        let temp = TempDir::new().unwrap();
        let specs = FileSpecs::from_positionals(&[temp.path().display().to_string()]);
        let mut yes = |_: &str| true;
        let result = run(&specs, &EffectiveOptions::default(), &mut yes).unwrap();
        assert_eq!(result.messages[0].ident, "nofiles");
    }
}
