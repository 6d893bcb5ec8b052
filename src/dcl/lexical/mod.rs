//! # Lexical Functions
//!
//! String transforms in the spirit of DCL's `F$` lexicals. Each one is a pure
//! `(call, options) -> String` function registered by name in
//! [`LEXICAL_TABLE`]; nothing here reads stdin or writes output.
//!
//! ## Arguments
//!
//! A function's [`ParamShape`] says how the positional arguments split into
//! leading parameters and the text to transform:
//!
//! - `Text`: all arguments, joined with single spaces, are the text
//! - `Leading`: the first N arguments are parameters, the rest is the text
//! - `Element`: an index, then an optional one-character separator
//! - `ParamsOnly`: parameters, with any remainder as an optional extra
//!
//! When no text arguments remain (except for `ParamsOnly`), [`prepare`]
//! returns `None` for the text and the caller reads one line of stdin.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{DclError, Result};
use crate::options::EffectiveOptions;

pub mod case;
pub mod edit;
pub mod fields;
pub mod justify;
pub mod numbers;
pub mod whitespace;

/// The lexical function that runs symlink maintenance for named actions.
pub const MAINTENANCE_FUNCTION: &str = "dclsymlink";

const DEFAULT_ELEMENT_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape {
    Text,
    /// Descriptions of the leading parameters, used in error messages.
    Leading(&'static [&'static str]),
    Element,
    ParamsOnly(&'static [&'static str]),
}

/// One lexical function call: its parameters and the text it transforms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalCall {
    pub name: String,
    pub params: Vec<String>,
    pub input: String,
}

impl LexicalCall {
    fn param(&self, idx: usize) -> &str {
        self.params.get(idx).map(String::as_str).unwrap_or_default()
    }

    fn parse_param<T: std::str::FromStr>(&self, idx: usize, what: &str) -> Result<T> {
        let raw = self.param(idx);
        raw.trim().parse().map_err(|_| {
            DclError::invalid(&self.name, format!("{} must be a number, not '{}'", what, raw))
        })
    }
}

pub type LexicalFn = fn(&LexicalCall, &EffectiveOptions) -> Result<String>;

pub struct LexicalEntry {
    pub name: &'static str,
    pub shape: ParamShape,
    pub func: LexicalFn,
}

pub static LEXICAL_TABLE: &[LexicalEntry] = &[
    LexicalEntry { name: "capcase", shape: ParamShape::Text, func: |c, _| Ok(case::capcase(&c.input)) },
    LexicalEntry { name: "locase", shape: ParamShape::Text, func: |c, _| Ok(case::locase(&c.input)) },
    LexicalEntry { name: "upcase", shape: ParamShape::Text, func: |c, _| Ok(case::upcase(&c.input)) },
    LexicalEntry { name: "titlecase", shape: ParamShape::Text, func: |c, _| Ok(case::titlecase(&c.input)) },
    LexicalEntry { name: "collapse", shape: ParamShape::Text, func: |c, _| Ok(whitespace::collapse(&c.input)) },
    LexicalEntry { name: "compress", shape: ParamShape::Text, func: |c, _| Ok(whitespace::compress(&c.input)) },
    LexicalEntry { name: "cjust", shape: ParamShape::Leading(&["a field width"]), func: cjust_fn },
    LexicalEntry { name: "ljust", shape: ParamShape::Leading(&["a field width"]), func: ljust_fn },
    LexicalEntry { name: "rjust", shape: ParamShape::Leading(&["a field width"]), func: rjust_fn },
    LexicalEntry { name: "edit", shape: ParamShape::Leading(&["an edit list"]), func: |c, _| edit::edit(c.param(0), &c.input) },
    LexicalEntry { name: "element", shape: ParamShape::Element, func: element },
    LexicalEntry { name: "extract", shape: ParamShape::Leading(&["a start position", "a length"]), func: substr },
    LexicalEntry { name: "substr", shape: ParamShape::Leading(&["a start position", "a length"]), func: substr },
    LexicalEntry { name: "length", shape: ParamShape::Text, func: |c, _| Ok(c.input.chars().count().to_string()) },
    LexicalEntry { name: "pluralize", shape: ParamShape::ParamsOnly(&["a word", "a count"]), func: pluralize },
    LexicalEntry { name: "thousands", shape: ParamShape::Text, func: thousands },
    LexicalEntry { name: "numbernames", shape: ParamShape::Text, func: numbernames },
    LexicalEntry { name: "trim", shape: ParamShape::Text, func: |c, _| Ok(whitespace::trim(&c.input)) },
    LexicalEntry { name: "trim_leading", shape: ParamShape::Text, func: |c, _| Ok(whitespace::trim_leading(&c.input)) },
    LexicalEntry { name: "trim_trailing", shape: ParamShape::Text, func: |c, _| Ok(whitespace::trim_trailing(&c.input)) },
    LexicalEntry { name: "uncomment", shape: ParamShape::Text, func: |c, _| Ok(whitespace::uncomment(&c.input)) },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static LexicalEntry>> =
    Lazy::new(|| LEXICAL_TABLE.iter().map(|e| (e.name, e)).collect());

pub fn lookup(name: &str) -> Option<&'static LexicalEntry> {
    BY_NAME.get(name).copied()
}

macro_rules! justify_fn {
    ($name:ident, $f:path) => {
        fn $name(c: &LexicalCall, _: &EffectiveOptions) -> Result<String> {
            let width: usize = c.parse_param(0, "the field width")?;
            Ok($f(&c.input, width))
        }
    };
}

justify_fn!(cjust_fn, justify::cjust);
justify_fn!(ljust_fn, justify::ljust);
justify_fn!(rjust_fn, justify::rjust);

fn element(c: &LexicalCall, _: &EffectiveOptions) -> Result<String> {
    let index: usize = c.parse_param(0, "the element number")?;
    Ok(fields::element(&c.input, index, c.param(1)))
}

fn substr(c: &LexicalCall, _: &EffectiveOptions) -> Result<String> {
    let start: i64 = c.parse_param(0, "the start position")?;
    let len: usize = c.parse_param(1, "the length")?;
    Ok(fields::substr(&c.input, start, len))
}

fn pluralize(c: &LexicalCall, _: &EffectiveOptions) -> Result<String> {
    let count: i64 = c.parse_param(1, "the count")?;
    let irregular = Some(c.input.trim()).filter(|s| !s.is_empty());
    Ok(fields::pluralize(c.param(0), count, irregular))
}

fn thousands(c: &LexicalCall, _: &EffectiveOptions) -> Result<String> {
    numbers::thousands(&c.input)
        .ok_or_else(|| DclError::invalid(&c.name, format!("'{}' is not a number", c.input.trim())))
}

fn numbernames(c: &LexicalCall, _: &EffectiveOptions) -> Result<String> {
    let digits: String = c.input.trim().chars().filter(|ch| *ch != ',' && *ch != '_').collect();
    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest.to_string()),
        None => (false, digits),
    };
    let n: u64 = digits
        .parse()
        .map_err(|_| DclError::invalid(&c.name, format!("'{}' is not a whole number", c.input.trim())))?;

    let mut stanzas = numbers::number_names(n);
    if negative && n != 0 {
        stanzas[0] = format!("minus {}", stanzas[0]);
    }
    Ok(stanzas.join("\n"))
}

/// Splits positional arguments into parameters and text for `entry`.
///
/// The text is `None` when it should come from stdin instead.
pub fn prepare(entry: &LexicalEntry, args: &[String]) -> Result<(Vec<String>, Option<String>)> {
    let joined = |rest: &[String]| (!rest.is_empty()).then(|| rest.join(" "));

    match entry.shape {
        ParamShape::Text => Ok((Vec::new(), joined(args))),
        ParamShape::Leading(wanted) => {
            let params = take_params(entry.name, wanted, args)?;
            Ok((params, joined(&args[wanted.len()..])))
        }
        ParamShape::Element => {
            let mut params = take_params(entry.name, &["an element number"], args)?;
            let rest = &args[1..];
            match rest.first() {
                Some(sep) if sep.chars().count() == 1 => {
                    params.push(sep.clone());
                    Ok((params, joined(&rest[1..])))
                }
                _ => {
                    params.push(DEFAULT_ELEMENT_SEPARATOR.to_string());
                    Ok((params, joined(rest)))
                }
            }
        }
        ParamShape::ParamsOnly(wanted) => {
            let params = take_params(entry.name, wanted, args)?;
            Ok((params, Some(args[wanted.len()..].join(" "))))
        }
    }
}

fn take_params(action: &str, wanted: &[&str], args: &[String]) -> Result<Vec<String>> {
    if let Some(missing) = wanted.get(args.len()) {
        return Err(DclError::missing(action, *missing));
    }
    Ok(args[..wanted.len()].to_vec())
}

/// Runs the lexical function `name` on an already prepared call.
pub fn run(name: &str, params: Vec<String>, input: String, opts: &EffectiveOptions) -> Result<String> {
    let entry = lookup(name).ok_or_else(|| DclError::UnrecognizedAction(name.to_string()))?;
    let call = LexicalCall {
        name: name.to_string(),
        params,
        input,
    };
    (entry.func)(&call, opts)
}
