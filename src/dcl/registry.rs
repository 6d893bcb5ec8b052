//! # Name Registry
//!
//! The static catalog of every action the dispatcher answers to. Each name
//! belongs to exactly one of two groups:
//!
//! - **File commands**: DCL verbs that operate on file specs (`copy`, `delete`, ...)
//! - **Lexical functions**: string transforms modelled on DCL `F$` lexicals
//!
//! Order matters: help listings and symlink maintenance reports walk the
//! tables in the order written here.

/// The canonical name of the dispatcher executable itself.
pub const PROGRAM_NAME: &str = "dcl";

/// File-operation commands. (`set` is deliberately absent: it collides with
/// the shell builtin, so `show` stands in for it.)
pub const FILE_COMMANDS: &[&str] = &[
    "copy",
    "create",
    "rename",
    "delete",
    "purge",
    "search",
    "directory",
    "show",
];

pub const LEXICAL_FUNCTIONS: &[&str] = &[
    "capcase",
    "locase",
    "upcase",
    "titlecase",
    "collapse",
    "compress",
    "cjust",
    "ljust",
    "rjust",
    "edit",
    "element",
    "extract",
    "substr",
    "length",
    "pluralize",
    "thousands",
    "numbernames",
    "trim",
    "trim_leading",
    "trim_trailing",
    "uncomment",
    "dclsymlink",
];

/// Which handler group a registered name routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    FileCommand,
    LexicalFunction,
}

impl ActionKind {
    pub fn heading(&self) -> &'static str {
        match self {
            ActionKind::FileCommand => "Available commands:",
            ActionKind::LexicalFunction => "Available functions:",
        }
    }

    pub fn names(&self) -> &'static [&'static str] {
        match self {
            ActionKind::FileCommand => FILE_COMMANDS,
            ActionKind::LexicalFunction => LEXICAL_FUNCTIONS,
        }
    }

    pub fn all() -> &'static [ActionKind] {
        &[ActionKind::FileCommand, ActionKind::LexicalFunction]
    }
}

/// Every registered name: file commands first, then lexical functions.
pub fn all_names() -> impl Iterator<Item = &'static str> {
    FILE_COMMANDS.iter().chain(LEXICAL_FUNCTIONS.iter()).copied()
}

pub fn is_file_command(name: &str) -> bool {
    FILE_COMMANDS.contains(&name)
}

pub fn is_lexical_function(name: &str) -> bool {
    LEXICAL_FUNCTIONS.contains(&name)
}

pub fn kind_of(name: &str) -> Option<ActionKind> {
    if is_file_command(name) {
        Some(ActionKind::FileCommand)
    } else if is_lexical_function(name) {
        Some(ActionKind::LexicalFunction)
    } else {
        None
    }
}
