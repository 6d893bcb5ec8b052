use chrono::Local;
use std::env;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DclError, Result};
use crate::options::EffectiveOptions;
use crate::qualifiers::FileSpecs;

const SUBJECTS: &[&str] = &["default", "time", "user", "symbol", "logical"];
const MIN_ABBREVIATION: usize = 3;

/// Resolves a possibly abbreviated subject (`def`, `sym`, ...).
fn subject(word: &str) -> Option<&'static str> {
    let word = word.to_lowercase();
    if word.len() < MIN_ABBREVIATION {
        return None;
    }
    SUBJECTS.iter().copied().find(|s| s.starts_with(&word))
}

/// `show default|time|user|symbol NAME|logical NAME`
pub fn run(specs: &FileSpecs, _opts: &EffectiveOptions) -> Result<CmdResult> {
    let words = specs.all();
    let first = words
        .first()
        .ok_or_else(|| DclError::missing("show", format!("one of: {}", SUBJECTS.join(", "))))?;
    let what = subject(first)
        .ok_or_else(|| DclError::invalid("show", format!("unknown subject '{}'", first)))?;

    let mut result = CmdResult::default();
    match what {
        "default" => result.push_line(env::current_dir()?.display().to_string()),
        "time" => result.push_line(
            Local::now()
                .format("%d-%b-%Y %H:%M:%S")
                .to_string()
                .to_uppercase(),
        ),
        "user" => match env::var("USER").or_else(|_| env::var("LOGNAME")) {
            Ok(user) => result.push_line(user),
            Err(_) => result.add_message(CmdMessage::warning("nouser", "user name is not defined")),
        },
        _ => {
            let name = words
                .get(1)
                .ok_or_else(|| DclError::missing("show", format!("a {} name", what)))?;
            match env::var(name) {
                Ok(value) => result.push_line(format!("  {} = \"{}\"", name, value)),
                Err(_) => result.add_message(CmdMessage::warning(
                    "undsym",
                    format!("undefined {} {}", what, name),
                )),
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(items: &[&str]) -> FileSpecs {
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        FileSpecs::from_positionals(&items)
    }

    #[test]
    fn abbreviations() {
        assert_eq!(subject("DEF"), Some("default"));
        assert_eq!(subject("sym"), Some("symbol"));
        assert_eq!(subject("ti"), None);
        assert_eq!(subject("nonsense"), None);
    }

    #[test]
    fn shows_default_directory() {
        let result = run(&specs(&["default"]), &EffectiveOptions::default()).unwrap();
        let cwd = env::current_dir().unwrap();
        assert_eq!(result.output, format!("{}\n", cwd.display()));
    }

    #[test]
    fn shows_symbol_from_environment() {
        let result = run(&specs(&["symbol", "PATH"]), &EffectiveOptions::default()).unwrap();
        assert!(result.output.starts_with("  PATH = \""));
    }

    #[test]
    fn undefined_symbol_is_a_warning() {
        let result = run(
            &specs(&["logical", "DCL_SURELY_UNDEFINED_NAME"]),
            &EffectiveOptions::default(),
        )
        .unwrap();
        assert!(result.output.is_empty());
        assert_eq!(result.messages[0].ident, "undsym");
    }

    #[test]
    fn unknown_subject() {
        let err = run(&specs(&["weather"]), &EffectiveOptions::default()).unwrap_err();
        assert!(matches!(err, DclError::InvalidArgument { .. }));
    }
}
