//! # Symlink Maintenance
//!
//! The dispatcher is reached through one symlink per registered action, each
//! pointing back at the canonical executable. [`ensure_symlinks`] creates the
//! missing ones and verifies the rest.
//!
//! Per name, in order:
//!
//! 1. no entry at the link path: create the symlink (`Created`)
//! 2. a symlink resolving to the executable: `Verified`
//! 3. a symlink resolving anywhere else: `BrokenLink`, left untouched
//! 4. anything that is not a symlink: `Conflict`, left untouched
//!
//! Existing entries are never replaced. A second pass over an unchanged
//! directory reports `Verified` for everything the first pass created and
//! changes nothing. Names are independent: a failure on one is recorded in
//! its entry and the pass moves on.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::CmdMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymlinkState {
    Verified,
    Created,
    /// A non-symlink already occupies the link path.
    Conflict,
    /// An existing symlink points somewhere other than the executable.
    BrokenLink { points_to: PathBuf },
    /// The directory or the link could not be created or inspected.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkEntry {
    pub name: String,
    pub target_path: PathBuf,
    pub link_path: PathBuf,
    pub state: SymlinkState,
}

impl SymlinkEntry {
    pub fn to_message(&self) -> CmdMessage {
        let link = self.link_path.display();
        let target = self.target_path.display();
        match &self.state {
            SymlinkState::Created => {
                CmdMessage::success("created", format!("symlink {} created (-> {})", link, target))
            }
            SymlinkState::Verified => {
                CmdMessage::info("verified", format!("symlink {} is verified (-> {})", link, target))
            }
            SymlinkState::BrokenLink { points_to } => CmdMessage::error(
                "badlink",
                format!(
                    "symlink {} is wrong (-> {}, not {})",
                    link,
                    points_to.display(),
                    target
                ),
            ),
            SymlinkState::Conflict => CmdMessage::error(
                "conflict",
                format!("file {} exists, no symlink created", link),
            ),
            SymlinkState::Failed(reason) => CmdMessage::error(
                "linkfail",
                format!("symlink {} not created: {}", link, reason),
            ),
        }
    }
}

/// Per-state tallies for one maintenance pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymlinkCounts {
    pub created: usize,
    pub verified: usize,
    pub conflicts: usize,
    pub broken: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymlinkReport {
    pub entries: Vec<SymlinkEntry>,
}

impl SymlinkReport {
    pub fn counts(&self) -> SymlinkCounts {
        self.entries
            .iter()
            .fold(SymlinkCounts::default(), |mut c, e| {
                match e.state {
                    SymlinkState::Created => c.created += 1,
                    SymlinkState::Verified => c.verified += 1,
                    SymlinkState::Conflict => c.conflicts += 1,
                    SymlinkState::BrokenLink { .. } => c.broken += 1,
                    SymlinkState::Failed(_) => c.failed += 1,
                }
                c
            })
    }

    pub fn state_of(&self, name: &str) -> Option<&SymlinkState> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.state)
    }

    pub fn summary_message(&self) -> CmdMessage {
        let c = self.counts();
        CmdMessage::info(
            "summary",
            format!(
                "{} created, {} verified, {} conflicts, {} wrong links, {} failed",
                c.created, c.verified, c.conflicts, c.broken, c.failed
            ),
        )
    }
}

/// Creates or verifies `link_dir/<name>` -> `target` for each name.
pub fn ensure_symlinks<S: AsRef<str>>(names: &[S], target: &Path, link_dir: &Path) -> SymlinkReport {
    let dir_error = fs::create_dir_all(link_dir).err().map(|e| {
        format!("cannot create directory {}: {}", link_dir.display(), e)
    });

    let entries = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let link_path = link_dir.join(name);
            let state = match &dir_error {
                Some(reason) => SymlinkState::Failed(reason.clone()),
                None => ensure_one(target, &link_path),
            };
            debug!(name, link = %link_path.display(), ?state, "symlink maintenance");
            SymlinkEntry {
                name: name.to_string(),
                target_path: target.to_path_buf(),
                link_path,
                state,
            }
        })
        .collect();

    SymlinkReport { entries }
}

fn ensure_one(target: &Path, link_path: &Path) -> SymlinkState {
    if let Some(state) = inspect(target, link_path) {
        return state;
    }
    match symlink(target, link_path) {
        Ok(()) => SymlinkState::Created,
        // Another installer got there first; report what is there now.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => inspect(target, link_path)
            .unwrap_or_else(|| SymlinkState::Failed(e.to_string())),
        Err(e) => SymlinkState::Failed(e.to_string()),
    }
}

/// State of an existing entry at `link_path`, or `None` if nothing is there.
fn inspect(target: &Path, link_path: &Path) -> Option<SymlinkState> {
    let meta = match fs::symlink_metadata(link_path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => return Some(SymlinkState::Failed(e.to_string())),
    };
    if !meta.file_type().is_symlink() {
        return Some(SymlinkState::Conflict);
    }

    let points_to = match fs::read_link(link_path) {
        Ok(dest) => dest,
        Err(e) => return Some(SymlinkState::Failed(e.to_string())),
    };
    let resolved = resolve_relative(link_path, &points_to);
    if same_file(&resolved, target) {
        Some(SymlinkState::Verified)
    } else {
        Some(SymlinkState::BrokenLink { points_to })
    }
}

/// Relative link contents are relative to the directory holding the link.
fn resolve_relative(link_path: &Path, dest: &Path) -> PathBuf {
    if dest.is_absolute() {
        return dest.to_path_buf();
    }
    link_path
        .parent()
        .map(|p| p.join(dest))
        .unwrap_or_else(|| dest.to_path_buf())
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("dcl");
        fs::write(&target, "#!/bin/sh\n").unwrap();
        let link_dir = temp.path().join("bin");
        (temp, target, link_dir)
    }

    #[test]
    fn creates_then_verifies() {
        let (_temp, target, link_dir) = setup();
        let names = ["upcase", "copy", "trim"];

        let first = ensure_symlinks(&names, &target, &link_dir);
        assert!(first.entries.iter().all(|e| e.state == SymlinkState::Created));
        assert_eq!(first.counts().created, 3);

        let second = ensure_symlinks(&names, &target, &link_dir);
        assert!(second.entries.iter().all(|e| e.state == SymlinkState::Verified));
        assert_eq!(second.counts().verified, 3);

        for name in names {
            assert_eq!(fs::read_link(link_dir.join(name)).unwrap(), target);
        }
    }

    #[test]
    fn creates_missing_link_directory() {
        let (_temp, target, link_dir) = setup();
        let nested = link_dir.join("deeper");
        let report = ensure_symlinks(&["upcase"], &target, &nested);
        assert_eq!(report.state_of("upcase"), Some(&SymlinkState::Created));
        assert!(nested.is_dir());
    }

    #[test]
    fn ordinary_file_is_a_conflict_and_untouched() {
        let (_temp, target, link_dir) = setup();
        fs::create_dir_all(&link_dir).unwrap();
        let occupied = link_dir.join("copy");
        fs::write(&occupied, b"precious \x00 bytes").unwrap();

        let report = ensure_symlinks(&["copy", "upcase"], &target, &link_dir);
        assert_eq!(report.state_of("copy"), Some(&SymlinkState::Conflict));
        assert_eq!(report.state_of("upcase"), Some(&SymlinkState::Created));
        assert_eq!(fs::read(&occupied).unwrap(), b"precious \x00 bytes");
        assert!(!fs::symlink_metadata(&occupied).unwrap().file_type().is_symlink());
    }

    #[test]
    fn foreign_symlink_is_reported_not_repaired() {
        let (temp, target, link_dir) = setup();
        fs::create_dir_all(&link_dir).unwrap();
        let elsewhere = temp.path().join("other-tool");
        fs::write(&elsewhere, "").unwrap();
        symlink(&elsewhere, link_dir.join("trim")).unwrap();

        let report = ensure_symlinks(&["trim"], &target, &link_dir);
        assert_eq!(
            report.state_of("trim"),
            Some(&SymlinkState::BrokenLink {
                points_to: elsewhere.clone()
            })
        );
        assert_eq!(fs::read_link(link_dir.join("trim")).unwrap(), elsewhere);
    }

    #[test]
    fn relative_link_to_target_is_verified() {
        let (_temp, target, link_dir) = setup();
        fs::create_dir_all(&link_dir).unwrap();
        symlink(Path::new("../dcl"), link_dir.join("locase")).unwrap();

        let report = ensure_symlinks(&["locase"], &target, &link_dir);
        assert_eq!(report.state_of("locase"), Some(&SymlinkState::Verified));
    }

    #[test]
    fn uncreatable_directory_fails_every_entry() {
        let (temp, target, _) = setup();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let link_dir = blocker.join("bin");

        let report = ensure_symlinks(&["upcase", "copy"], &target, &link_dir);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.counts().failed, 2);
    }

    #[test]
    fn unwritable_link_dir_fails_per_entry() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, target, link_dir) = setup();
        fs::create_dir_all(&link_dir).unwrap();
        symlink(&target, link_dir.join("upcase")).unwrap();
        fs::set_permissions(&link_dir, fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits do not bind a privileged user.
        let writable = fs::write(link_dir.join(".check"), "").is_ok();
        if !writable {
            let report = ensure_symlinks(&["upcase", "copy", "trim"], &target, &link_dir);
            assert_eq!(report.entries.len(), 3);
            assert_eq!(report.state_of("upcase"), Some(&SymlinkState::Verified));
            assert!(matches!(report.state_of("copy"), Some(SymlinkState::Failed(_))));
            assert!(matches!(report.state_of("trim"), Some(SymlinkState::Failed(_))));
            assert_eq!(report.counts().failed, 2);
            assert_eq!(report.entries[1].to_message().ident, "linkfail");
        }

        fs::set_permissions(&link_dir, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn entry_messages_carry_idents() {
        let (_temp, target, link_dir) = setup();
        let report = ensure_symlinks(&["upcase"], &target, &link_dir);
        assert_eq!(report.entries[0].to_message().ident, "created");
        let report = ensure_symlinks(&["upcase"], &target, &link_dir);
        assert_eq!(report.entries[0].to_message().ident, "verified");
        assert!(report.summary_message().content.starts_with("0 created, 1 verified"));
    }
}
