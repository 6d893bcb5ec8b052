//! Option blending: command-line switches merged with DCL qualifiers.
//!
//! Boolean flags are OR'd, so a setting requested either way is on. Settings
//! outside the qualifier vocabulary (noop, preserve, pager) only ever come
//! from the global options.

use serde::Serialize;
use std::path::PathBuf;

use crate::qualifiers::Qualifiers;

/// Options parsed from conventional command-line switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalOptions {
    pub verbose: bool,
    pub noop: bool,
    pub confirm: bool,
    pub pager: bool,
    pub preserve: bool,
    /// Run the symlink maintenance pass instead of dispatching.
    pub symlinks: bool,
    pub debug: u8,
    pub link_dir: Option<PathBuf>,
}

/// The options one action actually runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveOptions {
    pub verbose: bool,
    pub confirm: bool,
    pub noop: bool,
    pub preserve: bool,
    pub pager: bool,
}

pub fn blend(global: &GlobalOptions, qualifiers: &Qualifiers) -> EffectiveOptions {
    EffectiveOptions {
        verbose: global.verbose || qualifiers.verbose,
        confirm: global.confirm || qualifiers.confirm,
        noop: global.noop,
        preserve: global.preserve,
        pager: global.pager,
    }
}
