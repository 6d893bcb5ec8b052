use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::commands::CmdMessage;

#[derive(Error, Debug)]
pub enum DclError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("DCL action '{0}' is not recognized")]
    UnrecognizedAction(String),

    #[error("destination path must be a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{action} requires {what}")]
    MissingArgument { action: String, what: String },

    #[error("{action}: {message}")]
    InvalidArgument { action: String, message: String },

    #[error("{action} failed: {source}")]
    Handler {
        action: String,
        #[source]
        source: Box<DclError>,
    },

    #[error("Config error: {0}")]
    Config(String),

    /// A multi-item operation stopped partway; `completed` holds the step
    /// messages recorded before the failure.
    #[error("{source}")]
    Interrupted {
        completed: Vec<CmdMessage>,
        source: Box<DclError>,
    },
}

impl DclError {
    pub fn missing(action: &str, what: impl Into<String>) -> Self {
        DclError::MissingArgument {
            action: action.to_string(),
            what: what.into(),
        }
    }

    pub fn invalid(action: &str, message: impl Into<String>) -> Self {
        DclError::InvalidArgument {
            action: action.to_string(),
            message: message.into(),
        }
    }

    pub fn file(path: &Path, source: io::Error) -> Self {
        DclError::File {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Splits off the messages an interrupted operation recorded before failing.
    pub fn take_completed(self) -> (Vec<CmdMessage>, DclError) {
        match self {
            DclError::Interrupted { completed, source } => (completed, *source),
            other => (Vec::new(), other),
        }
    }

    /// Wraps a handler failure with the name of the action that raised it.
    /// Errors that already carry an action are left alone.
    pub fn in_action(self, action: &str) -> Self {
        match self {
            DclError::Handler { .. }
            | DclError::UnrecognizedAction(_)
            | DclError::MissingArgument { .. }
            | DclError::InvalidArgument { .. } => self,
            DclError::Interrupted { completed, source } => DclError::Interrupted {
                completed,
                source: Box::new(source.in_action(action)),
            },
            other => DclError::Handler {
                action: action.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Short message identifier in the `%FACILITY-S-IDENT` convention.
    pub fn ident(&self) -> &'static str {
        match self {
            DclError::Io(_) | DclError::File { .. } => "ioerr",
            DclError::Serialization(_) => "badjson",
            DclError::Pattern(_) => "badpat",
            DclError::UnrecognizedAction(_) => "nyi",
            DclError::NotADirectory(_) => "notdir",
            DclError::MissingArgument { .. } => "insfarg",
            DclError::InvalidArgument { .. } => "badarg",
            DclError::Handler { source, .. } => source.ident(),
            DclError::Config(_) => "badcfg",
            DclError::Interrupted { source, .. } => source.ident(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DclError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_wrapping_keeps_inner_ident() {
        let err = DclError::NotADirectory(PathBuf::from("/tmp/x")).in_action("copy");
        assert_eq!(err.ident(), "notdir");
        let text = err.to_string();
        assert!(text.starts_with("copy failed"));
        assert!(text.contains("/tmp/x"));
    }

    #[test]
    fn argument_errors_are_not_double_wrapped() {
        let err = DclError::missing("cjust", "a width").in_action("cjust");
        assert!(matches!(err, DclError::MissingArgument { .. }));
        assert_eq!(err.to_string(), "cjust requires a width");
    }

    #[test]
    fn file_errors_name_the_path() {
        let io = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let err = DclError::file(Path::new("/tmp/b"), io).in_action("delete");
        assert_eq!(err.to_string(), "delete failed: /tmp/b: No such file or directory");
        assert_eq!(err.ident(), "ioerr");
    }

    #[test]
    fn interrupted_errors_give_back_their_messages() {
        let err = DclError::Interrupted {
            completed: vec![CmdMessage::success("deleted", "/tmp/a deleted")],
            source: Box::new(DclError::NotADirectory(PathBuf::from("/tmp/x"))),
        };
        let (completed, cause) = err.take_completed();
        assert_eq!(completed.len(), 1);
        assert!(matches!(cause, DclError::NotADirectory(_)));

        let wrapped = DclError::Interrupted {
            completed: vec![CmdMessage::success("deleted", "/tmp/a deleted")],
            source: Box::new(DclError::Config("x".into())),
        }
        .in_action("delete");
        let (completed, cause) = wrapped.take_completed();
        assert_eq!(completed.len(), 1);
        assert!(matches!(cause, DclError::Handler { ref action, .. } if action == "delete"));

        let (none, _) = DclError::Config("x".into()).take_completed();
        assert!(none.is_empty());
    }

    #[test]
    fn unrecognized_action_names_the_action() {
        let err = DclError::UnrecognizedAction("frobnicate".into());
        assert!(err.to_string().contains("frobnicate"));
        assert_eq!(err.ident(), "nyi");
    }
}
