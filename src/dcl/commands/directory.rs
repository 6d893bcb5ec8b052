//! VMS-flavoured directory listing.

use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

use crate::commands::helpers::size_human_readable;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

const DATETIME_FORMAT: &str = "%a %d-%b-%Y %H:%M:%S";
const SIZE_WIDTH: usize = 7;

#[derive(Debug)]
struct Row {
    name: String,
    size: u64,
    modified: String,
    mode: String,
}

pub fn run(specs: &FileSpecs, _opts: &EffectiveOptions) -> Result<CmdResult> {
    let mut targets: Vec<PathBuf> = specs.all().into_iter().map(PathBuf::from).collect();
    if targets.is_empty() {
        targets.push(PathBuf::from("."));
    }

    let mut result = CmdResult::default();
    let mut grand_files = 0usize;
    let mut grand_size = 0u64;
    let mut listed_dirs = 0usize;

    for target in &targets {
        let (dir, rows) = if target.is_dir() {
            (target.clone(), list_dir(target)?)
        } else {
            let meta = fs::symlink_metadata(target)?;
            let parent = target
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            let name = target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (parent, vec![row(name, &meta)])
        };

        let abs = fs::canonicalize(&dir).unwrap_or(dir);
        result.push_line("");
        result.push_line(format!("Directory {}/", abs.display()));
        result.push_line("");

        let name_width = rows.iter().map(|r| r.name.width()).max().unwrap_or(0);
        let mut total = 0u64;
        for r in &rows {
            let pad = name_width - r.name.width();
            result.push_line(format!(
                "{}{}  {:>sw$}  {}  {}",
                r.name,
                " ".repeat(pad),
                size_human_readable(r.size),
                r.modified,
                r.mode,
                sw = SIZE_WIDTH
            ));
            total += r.size;
        }
        result.push_line("");
        result.push_line(format!(
            "Total of {} {}, {}",
            rows.len(),
            if rows.len() == 1 { "file" } else { "files" },
            size_human_readable(total)
        ));

        grand_files += rows.len();
        grand_size += total;
        listed_dirs += 1;
    }

    if listed_dirs > 1 {
        result.push_line("");
        result.push_line(format!(
            "Grand total of {} directories, {} files, {}",
            listed_dirs,
            grand_files,
            size_human_readable(grand_size)
        ));
    }
    Ok(result)
}

fn list_dir(dir: &Path) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if meta.is_dir() {
            name.push('/');
        }
        rows.push(row(name, &meta));
    }
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(rows)
}

fn row(name: String, meta: &Metadata) -> Row {
    let modified = meta
        .modified()
        .map(|t| DateTime::<Local>::from(t).format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|_| "-".repeat(24));
    Row {
        name,
        size: meta.len(),
        modified,
        mode: mode_string(meta),
    }
}

/// `ls -l` style permission string, e.g. `-rw-r--r--` or `drwxr-xr-x`.
fn mode_string(meta: &Metadata) -> String {
    let kind = if meta.file_type().is_symlink() {
        'l'
    } else if meta.is_dir() {
        'd'
    } else {
        '-'
    };
    let mode = meta.permissions().mode();
    let mut out = String::with_capacity(10);
    out.push(kind);
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}
