//! Error handling for the rpi-info status crate.

/// A specialized `Result` type for status operations.
pub type Result<T> = std::result::Result<T, SystemError>;

/// The main error type for status operations.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A status file existed but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// File content was not in the expected numeric form
    #[error("failed to parse {content:?} from {path} as millidegrees")]
    Parse { path: String, content: String },

    /// The external interface-listing command failed
    #[error("command `{command}` failed:\n{output}")]
    Command { command: String, output: String },
}

impl SystemError {
    /// Create a new read error for the given path.
    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error for the given path and offending content.
    pub fn parse_error(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Create a new command error carrying the invocation and its combined output.
    pub fn command_error(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self::Command {
            command: command.into(),
            output: output.into(),
        }
    }
}
