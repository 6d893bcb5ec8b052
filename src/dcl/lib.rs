//! # DCL Architecture
//!
//! `dcl` is a multi-call program: one executable, reached through one symlink
//! per action (`copy`, `upcase`, `thousands`, ...). The name the process was
//! started under selects the action; conventional flags and DCL-style
//! `/QUALIFIERS` tune it.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/dcl/cli/)                                   │
//! │  - clap flag parsing, help listings (setup.rs)              │
//! │  - logging, config, console wiring (commands.rs)            │
//! │  - %DCL-S-IDENT message rendering (render.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (dispatch.rs)                                   │
//! │  - invoked name -> route, maintenance flag first            │
//! │  - qualifier parsing and option blending for file commands  │
//! │  - stdin fallback and verbose echo for lexical functions    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Actions                                                    │
//! │  - commands/*: file operations returning `CmdResult`        │
//! │  - lexical/*: pure string transformations                   │
//! │  - symlinks.rs: idempotent link maintenance                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the CLI is terminal agnostic. Commands report through
//! [`commands::CmdResult`], the dispatcher reaches stdin and prompts only
//! through [`dispatch::Console`], and nothing but the binary exits the process.
//!
//! ## Testing Approach
//!
//! - **Lexical functions and qualifiers**: plain unit tests on strings.
//! - **File commands and symlinks**: unit tests against `tempfile` directories.
//! - **Dispatcher**: a scripted console checks routing, stdin use and echo.
//! - **Binary**: `tests/` drives the built executable through symlinks with
//!   `assert_cmd`.

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod invocation;
pub mod lexical;
pub mod options;
pub mod qualifiers;
pub mod registry;
pub mod symlinks;
