use clap::{CommandFactory, Parser};
use dcl::options::GlobalOptions;
use dcl::registry::ActionKind;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v2.3.0"
/// Format for dev builds: "v2.3.0\ndev: abc1234 2024-01-15"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// The registry listings appended to `--help`, in registry order.
pub fn available_actions() -> &'static str {
    static LISTING: OnceLock<String> = OnceLock::new();

    LISTING.get_or_init(|| {
        ActionKind::all()
            .iter()
            .map(|kind| format!("{}\n{}", kind.heading(), wrap_names(kind.names(), 8)))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

fn wrap_names(names: &[&str], per_line: usize) -> String {
    names
        .chunks(per_line)
        .map(|chunk| format!("  {}", chunk.join(", ")))
        .collect::<Vec<_>>()
        .join(",\n")
}

pub fn about_text() -> String {
    format!(
        "dcl {}\nDCL-style file commands and lexical functions for the Unix shell.\n\
         Each action is a symlink to this program; run `dcl --symlinks` to install them.",
        get_version().lines().next().unwrap_or_default()
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "dcl",
    bin_name = "dcl",
    version = get_version(),
    about = "DCL-style file commands and lexical functions, dispatched by invocation name",
    long_about = None,
    allow_negative_numbers = true,
    after_help = available_actions()
)]
pub struct Cli {
    /// Arguments for the invoked action (file specs, /QUALIFIERS, text)
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Dry run: report what would happen (implies --verbose)
    #[arg(short = 'n', long = "noop", visible_aliases = ["dryrun", "test"], help_heading = "Options")]
    pub noop: bool,

    /// Confirm each file operation
    #[arg(short = 'i', long = "interactive", visible_alias = "confirm", help_heading = "Options")]
    pub confirm: bool,

    /// Page long output
    #[arg(short = 'm', long = "pager", visible_aliases = ["less", "more"], help_heading = "Options")]
    pub pager: bool,

    /// Preserve timestamps and permissions on copy
    #[arg(short, long, help_heading = "Options")]
    pub preserve: bool,

    /// Verbose output
    #[arg(short, long, visible_alias = "log", help_heading = "Options")]
    pub verbose: bool,

    /// Debug level (0-3); RUST_LOG takes precedence
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=3),
        help_heading = "Options"
    )]
    pub debug: u8,

    /// Create or verify the action symlinks
    #[arg(short = 'l', long = "links", visible_alias = "symlinks", help_heading = "Installation")]
    pub symlinks: bool,

    /// Directory for the action symlinks
    #[arg(long, value_name = "DIR", help_heading = "Installation")]
    pub link_dir: Option<PathBuf>,

    /// Show program identification
    #[arg(short, long, help_heading = "Options")]
    pub about: bool,
}

impl Cli {
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose || self.noop,
            noop: self.noop,
            confirm: self.confirm,
            pager: self.pager,
            preserve: self.preserve,
            symlinks: self.symlinks,
            debug: self.debug,
            link_dir: self.link_dir.clone(),
        }
    }
}

/// Parses `argv`, exiting with clap's usage error on bad flags.
pub fn parse_cli(argv: &[OsString]) -> Cli {
    Cli::parse_from(argv)
}

/// Usage plus the action listings, as shown for a bare `dcl`.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
