//! # DCL Qualifiers
//!
//! DCL commands take *qualifiers* (`/LOG`, `/CONFIRM`) mixed in with their
//! file specs: `copy /LOG a.txt b.txt /CONF`. This module pulls them apart in
//! a single left-to-right pass. Every token is either a qualifier or a file
//! spec, and file specs keep their order.
//!
//! Matching is case-insensitive and accepts DCL-style abbreviations down to a
//! minimum length (`/CONF`, `/CONFI`, ... `/CONFIRM`).

use serde::Serialize;

/// The semantic effect of a recognized qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Log,
    Confirm,
}

struct QualifierPattern {
    keyword: &'static str,
    min_len: usize,
    qualifier: Qualifier,
}

/// Table order is the tie-break: the first pattern that matches wins.
const QUALIFIER_TABLE: &[QualifierPattern] = &[
    QualifierPattern {
        keyword: "LOG",
        min_len: 3,
        qualifier: Qualifier::Log,
    },
    QualifierPattern {
        keyword: "CONFIRM",
        min_len: 4,
        qualifier: Qualifier::Confirm,
    },
];

const QUALIFIER_PREFIX: char = '/';

impl Qualifier {
    /// Classifies one token, returning `None` for anything that is a file spec.
    pub fn match_token(token: &str) -> Option<Qualifier> {
        let word = token.strip_prefix(QUALIFIER_PREFIX)?;
        QUALIFIER_TABLE
            .iter()
            .find(|p| {
                word.len() >= p.min_len
                    && word.len() <= p.keyword.len()
                    && p.keyword[..word.len()].eq_ignore_ascii_case(word)
            })
            .map(|p| p.qualifier)
    }
}

/// The flags recorded from qualifiers. Unset means false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Qualifiers {
    pub verbose: bool,
    pub confirm: bool,
}

impl Qualifiers {
    fn record(&mut self, qualifier: Qualifier) {
        match qualifier {
            Qualifier::Log => self.verbose = true,
            Qualifier::Confirm => self.confirm = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Qualifiers::default()
    }
}

/// Result of separating qualifiers from positional file specs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub positionals: Vec<String>,
    pub qualifiers: Qualifiers,
}

impl ParsedArgs {
    pub fn file_specs(&self) -> FileSpecs {
        FileSpecs::from_positionals(&self.positionals)
    }
}

/// Positional file specs split as "N sources, one destination".
///
/// | positionals | sources        | destination |
/// |-------------|----------------|-------------|
/// | 0           | `[]`           | `None`      |
/// | 1           | `[a]`          | `None`      |
/// | 2           | `[a]`          | `Some(b)`   |
/// | 3+          | all but last   | `Some(last)`|
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileSpecs {
    pub sources: Vec<String>,
    pub destination: Option<String>,
}

impl FileSpecs {
    pub fn from_positionals(positionals: &[String]) -> Self {
        match positionals {
            [] => FileSpecs::default(),
            [only] => FileSpecs {
                sources: vec![only.clone()],
                destination: None,
            },
            [sources @ .., last] => FileSpecs {
                sources: sources.to_vec(),
                destination: Some(last.clone()),
            },
        }
    }

    /// Every spec in encounter order, destination included.
    pub fn all(&self) -> Vec<String> {
        self.sources
            .iter()
            .cloned()
            .chain(self.destination.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.destination.is_none()
    }
}

/// Separates qualifiers from file specs in one pass over `args`.
pub fn parse<S: AsRef<str>>(args: &[S]) -> ParsedArgs {
    let mut parsed = ParsedArgs::default();
    for arg in args {
        let arg = arg.as_ref();
        match Qualifier::match_token(arg) {
            Some(q) => parsed.qualifiers.record(q),
            None => parsed.positionals.push(arg.to_string()),
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn separates_qualifier_from_file_specs() {
        let parsed = parse(&["foo", "/CONFIRM", "bar"]);
        assert_eq!(parsed.positionals, strings(&["foo", "bar"]));
        assert_eq!(
            parsed.qualifiers,
            Qualifiers {
                confirm: true,
                verbose: false
            }
        );
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let parsed = parse::<&str>(&[]);
        assert!(parsed.positionals.is_empty());
        assert!(parsed.qualifiers.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let parsed = parse(&["/log", "/Confirm", "x"]);
        assert!(parsed.qualifiers.verbose);
        assert!(parsed.qualifiers.confirm);
        assert_eq!(parsed.positionals, strings(&["x"]));
    }

    #[test]
    fn accepts_abbreviations_down_to_minimum() {
        assert_eq!(Qualifier::match_token("/CONF"), Some(Qualifier::Confirm));
        assert_eq!(Qualifier::match_token("/confi"), Some(Qualifier::Confirm));
        assert_eq!(Qualifier::match_token("/CON"), None);
        assert_eq!(Qualifier::match_token("/CONFIRMED"), None);
        assert_eq!(Qualifier::match_token("/LO"), None);
    }

    #[test]
    fn unknown_slash_tokens_are_file_specs() {
        let parsed = parse(&["/etc/hosts", "/tmp", "/LOGGING"]);
        assert_eq!(parsed.positionals, strings(&["/etc/hosts", "/tmp", "/LOGGING"]));
        assert!(parsed.qualifiers.is_empty());
    }

    #[test]
    fn file_spec_order_is_preserved() {
        let parsed = parse(&["c", "/LOG", "a", "b"]);
        assert_eq!(parsed.positionals, strings(&["c", "a", "b"]));
    }

    #[test]
    fn arity_zero() {
        let specs = FileSpecs::from_positionals(&[]);
        assert!(specs.sources.is_empty());
        assert_eq!(specs.destination, None);
        assert!(specs.is_empty());
    }

    #[test]
    fn arity_one() {
        let specs = FileSpecs::from_positionals(&strings(&["a"]));
        assert_eq!(specs.sources, strings(&["a"]));
        assert_eq!(specs.destination, None);
    }

    #[test]
    fn arity_two() {
        let specs = FileSpecs::from_positionals(&strings(&["a", "b"]));
        assert_eq!(specs.sources, strings(&["a"]));
        assert_eq!(specs.destination.as_deref(), Some("b"));
    }

    #[test]
    fn arity_three() {
        let specs = FileSpecs::from_positionals(&strings(&["a", "b", "c"]));
        assert_eq!(specs.sources, strings(&["a", "b"]));
        assert_eq!(specs.destination.as_deref(), Some("c"));
    }

    #[test]
    fn arity_four() {
        let specs = FileSpecs::from_positionals(&strings(&["a", "b", "c", "d"]));
        assert_eq!(specs.sources, strings(&["a", "b", "c"]));
        assert_eq!(specs.destination.as_deref(), Some("d"));
        assert_eq!(specs.all(), strings(&["a", "b", "c", "d"]));
    }

    #[test]
    fn arity_counts_file_specs_not_raw_tokens() {
        let parsed = parse(&["/LOG", "a", "/CONF"]);
        let specs = parsed.file_specs();
        assert_eq!(specs.sources, strings(&["a"]));
        assert_eq!(specs.destination, None);
    }
}
