//! Error types shared by every module in the crate.
//!
//! Foreign errors (JSON, base64, regex, UTF-8) are captured by message so that
//! [`Error`] stays `Clone`. The caching primitives hand out clones of a stored
//! `Result`, which requires the error to be cloneable.

/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `zen` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An operation received fewer values than it needs.
    #[error("{op} requires at least {min} values, got {got}")]
    Arity {
        op: &'static str,
        min: usize,
        got: usize,
    },

    /// An index pointed past the end of a slice.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An argument was outside the accepted domain.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Integer arithmetic overflowed.
    #[error("arithmetic overflow in {op}")]
    Overflow { op: &'static str },

    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A dynamic value has a type the operation does not handle.
    #[error("unsupported type for {op}: {kind}")]
    UnsupportedType { op: &'static str, kind: &'static str },

    /// A dynamic value does not match the kind selected by the first value.
    #[error("type mismatch in {op}: expected {expected}, found {found}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A string could not be parsed into the requested type.
    #[error("failed to parse {input:?} as {target}")]
    Parse { input: String, target: &'static str },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(String),

    /// base64 input was malformed or did not decode to UTF-8.
    #[error("base64 error: {0}")]
    Base64(String),

    /// A regular expression failed to compile.
    #[error("invalid regex: {0}")]
    Regex(String),

    /// A keyed lookup referenced a key that is not present.
    #[error("referenced key is missing")]
    MissingKey,

    /// A cached value has not been computed yet.
    #[error("value has not been computed yet")]
    NotReady,

    /// The operation was cancelled.
    #[error("operation cancelled")]
    Cancelled,

    /// A producer went away without delivering a result.
    #[error("producer dropped without completing")]
    Abandoned,

    /// Internal channel send/receive failure (e.g., closed channel).
    #[error("Channel error: {context}")]
    ChannelError { context: String },
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(feature = "b64")]
impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err.to_string())
    }
}

#[cfg(feature = "regex")]
impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}

/// Checks that `got` values meet the `min` arity of `op`.
pub(crate) fn require_arity(op: &'static str, min: usize, got: usize) -> Result<()> {
    if got < min {
        return Err(Error::Arity { op, min, got });
    }
    Ok(())
}
