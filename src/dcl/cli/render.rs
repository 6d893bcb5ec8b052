use colored::Colorize;
use dcl::commands::{CmdMessage, MessageLevel};
use dcl::error::DclError;
use dcl::registry::PROGRAM_NAME;

/// `%dcl-S-ident, content`, the VMS message layout.
pub(super) fn format_message(message: &CmdMessage) -> String {
    format!(
        "%{}-{}-{}, {}",
        PROGRAM_NAME,
        message.level.severity(),
        message.ident,
        message.content
    )
}

pub(super) fn print_message(message: &CmdMessage) {
    let line = format_message(message);
    match message.level {
        MessageLevel::Info => eprintln!("{}", line.dimmed()),
        MessageLevel::Success => eprintln!("{}", line.green()),
        MessageLevel::Warning => eprintln!("{}", line.yellow()),
        MessageLevel::Error => eprintln!("{}", line.red()),
    }
}

pub(super) fn error_message(error: &DclError) -> CmdMessage {
    CmdMessage::error(error.ident(), error.to_string())
}

/// Reports a fatal error on stderr.
pub fn report_error(error: &DclError) {
    print_message(&error_message(error));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_layout() {
        let msg = CmdMessage::success("copied", "a.txt copied to b.txt");
        assert_eq!(format_message(&msg), "%dcl-S-copied, a.txt copied to b.txt");
    }

    #[test]
    fn errors_carry_their_ident() {
        let err = DclError::UnrecognizedAction("frobnicate".into());
        assert_eq!(
            format_message(&error_message(&err)),
            "%dcl-E-nyi, DCL action 'frobnicate' is not recognized"
        );
    }

    #[test]
    fn handler_errors_name_the_action() {
        let err = DclError::NotADirectory("/tmp/x".into()).in_action("copy");
        let line = format_message(&error_message(&err));
        assert!(line.starts_with("%dcl-E-notdir, copy failed:"));
    }
}
