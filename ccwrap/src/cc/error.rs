
/// Represents the types of errors that may occur while wrapping a compiler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error occurred while performing I/O.
    IOError,
    /// One of the compiler arguments or flags failed validation.
    InvalidArgument,
    /// The wrapper configuration is unusable.
    ConfigInvalid,
    /// Error occurred while starting the real compiler.
    ToolExecError,
    /// The real compiler could not be found.
    ToolNotFound,
}

/// Represents an internal error that occurred, with an explanation.
#[derive(Debug)]
pub struct Error {
    /// Describes the kind of error that occurred.
    kind: ErrorKind,
    /// More explanation of error that occurred.
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        Self { kind, message: message.to_owned() }
    }
    pub fn invalid_arg(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message.as_ref())
    }
    pub fn config(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message.as_ref())
    }
    pub fn tool_not_found(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::ToolNotFound, message.as_ref())
    }
    pub fn tool_exec(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::ToolExecError, message.as_ref())
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}


impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error{kind: ErrorKind::IOError, message: format!("{}", e)}
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}
