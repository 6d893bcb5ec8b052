//! The `dcl` binary only runs `cli::run()` and turns its outcome into an exit
//! status. See the library docs for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
