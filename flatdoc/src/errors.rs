use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for flatdoc operations.
///
/// Each kind describes one category of failure so callers can branch on
/// [`FlatDocError::kind`] instead of parsing messages. "Not found" is never an
/// error in flatdoc; it is reported through return values.
///
/// # Examples
///
/// ```rust,ignore
/// use flatdoc::errors::{FlatDocError, ErrorKind, FlatDocResult};
///
/// fn example() -> FlatDocResult<()> {
///     Err(FlatDocError::new("Backing file path is empty", ErrorKind::ValidationError))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    // IO and Storage Errors
    /// Generic IO error
    IOError,
    /// The file or one of its parent directories was not found
    FileNotFound,
    /// Permission denied for file operation
    PermissionDenied,

    // Data Encoding Errors
    /// Error serializing the database to its file format
    EncodingError,

    // Operation Errors
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Invalid configuration or argument
    ValidationError,
    /// The process-wide store has already been created
    StoreAlreadyInitialized,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::IOError => write!(f, "IO error"),
            ErrorKind::FileNotFound => write!(f, "File not found"),
            ErrorKind::PermissionDenied => write!(f, "Permission denied"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::StoreAlreadyInitialized => write!(f, "Store already initialized"),
        }
    }
}

/// The flatdoc error type.
///
/// `FlatDocError` carries a message, an [`ErrorKind`], an optional cause and the
/// backtrace captured where the error was created.
///
/// # Examples
///
/// ```rust,ignore
/// use flatdoc::errors::{FlatDocError, ErrorKind};
///
/// let cause = FlatDocError::new("No space left on device", ErrorKind::IOError);
/// let err = FlatDocError::new_with_cause("Failed to persist database", ErrorKind::IOError, cause);
/// ```
#[derive(Clone)]
pub struct FlatDocError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<FlatDocError>>,
    backtrace: Atomic<Backtrace>,
}

impl FlatDocError {
    /// Creates a new `FlatDocError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        FlatDocError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `FlatDocError` that wraps an underlying cause.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: FlatDocError) -> Self {
        FlatDocError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&FlatDocError> {
        self.cause.as_deref()
    }
}

impl Display for FlatDocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for FlatDocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for FlatDocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for flatdoc operations.
pub type FlatDocResult<T> = Result<T, FlatDocError>;

impl From<std::io::Error> for FlatDocError {
    fn from(err: std::io::Error) -> Self {
        let error_kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IOError,
        };
        FlatDocError::new(&format!("IO error: {}", err), error_kind)
    }
}

impl From<serde_json::Error> for FlatDocError {
    fn from(err: serde_json::Error) -> Self {
        let error_kind = if err.is_io() {
            ErrorKind::IOError
        } else {
            ErrorKind::EncodingError
        };
        FlatDocError::new(&format!("JSON error: {}", err), error_kind)
    }
}
