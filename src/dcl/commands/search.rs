use regex::RegexBuilder;
use std::fs;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DclError, Result};
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

/// `search file... pattern`: case-insensitive regular-expression search.
///
/// Each hit becomes one payload line, `file:line:text`.
pub fn run(specs: &FileSpecs, opts: &EffectiveOptions) -> Result<CmdResult> {
    let pattern = specs
        .destination
        .as_deref()
        .ok_or_else(|| DclError::missing("search", "file specs and a search pattern"))?;
    let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;

    let mut result = CmdResult::default();
    let mut hits = 0usize;
    for file in &specs.sources {
        let bytes = fs::read(file)?;
        let text = String::from_utf8_lossy(&bytes);
        for (idx, line) in text.lines().enumerate() {
            if re.is_match(line) {
                hits += 1;
                result.push_line(format!("{}:{}:{}", file, idx + 1, line));
            }
        }
    }

    if hits == 0 {
        result.add_message(CmdMessage::warning(
            "nomatches",
            format!("no strings matched '{}'", pattern),
        ));
    } else if opts.verbose {
        result.add_message(CmdMessage::info(
            "matched",
            format!("{} {} searched, {} lines matched", specs.sources.len(), files_word(specs.sources.len()), hits),
        ));
    }
    Ok(result)
}

fn files_word(n: usize) -> &'static str {
    if n == 1 { "file" } else { "files" }
}
