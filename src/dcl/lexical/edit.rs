//! `edit`: applies a comma-separated list of edits left to right.

use super::{case, whitespace};
use crate::error::{DclError, Result};

fn edit_fn(name: &str) -> Option<fn(&str) -> String> {
    let f: fn(&str) -> String = match name {
        "collapse" => whitespace::collapse,
        "compress" => whitespace::compress,
        "trim" => whitespace::trim,
        "trim_leading" => whitespace::trim_leading,
        "trim_trailing" => whitespace::trim_trailing,
        "uncomment" => whitespace::uncomment,
        "lowercase" | "locase" => case::locase,
        "uppercase" | "upcase" => case::upcase,
        "capcase" => case::capcase,
        "titlecase" => case::titlecase,
        _ => return None,
    };
    Some(f)
}

pub fn edit(editlist: &str, input: &str) -> Result<String> {
    editlist
        .split(',')
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .try_fold(input.to_string(), |acc, name| {
            let f = edit_fn(&name)
                .ok_or_else(|| DclError::invalid("edit", format!("unknown edit '{}'", name)))?;
            Ok(f(&acc))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_edits_in_order() {
        assert_eq!(
            edit("compress,upcase", "   this is a      test   ").unwrap(),
            "THIS IS A TEST"
        );
        assert_eq!(
            edit("uncomment, collapse", "a b # c").unwrap(),
            "ab"
        );
    }

    #[test]
    fn unknown_edit_is_rejected() {
        let err = edit("compress,sparkle", "x").unwrap_err();
        assert!(err.to_string().contains("sparkle"));
    }

    #[test]
    fn empty_list_is_identity() {
        assert_eq!(edit("", " x ").unwrap(), " x ");
    }
}
