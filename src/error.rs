//! Contains the Error and Result type used when reading and writing NBT.

use crate::codec::MAX_DEPTH;

/// An error that aborted a read or a write. Errors are never recovered from
/// part way through a tree, the whole operation fails with the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An identifier byte that is not one of the known kinds, or End where a
    /// data-bearing tag was required. Contains the offending byte.
    UnknownTagKind(u8),

    /// The input ran out before a field, or a Compound before its End.
    TruncatedStream,

    /// A length or count that is negative on read, or does not fit its wire
    /// width on write. Contains the length.
    MalformedLength(i64),

    /// A string payload that was not valid modified UTF-8. Contained bytes
    /// are the raw string data.
    Nonunicode(Vec<u8>),

    /// The root of the input was not a Compound. Contains the identifier
    /// that was found instead.
    NoRootCompound(u8),

    /// Lists and Compounds were nested more than 512 levels deep.
    DepthLimitExceeded,

    /// The underlying reader or writer failed.
    Io,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Whether the input ran out before the tree was complete.
    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::TruncatedStream)
    }

    pub(crate) fn unknown_kind(id: u8) -> Self {
        Self {
            msg: format!("unknown tag kind: {}", id),
            kind: ErrorKind::UnknownTagKind(id),
        }
    }

    pub(crate) fn truncated() -> Self {
        Self {
            msg: "truncated stream: unexpectedly ran out of input".into(),
            kind: ErrorKind::TruncatedStream,
        }
    }

    pub(crate) fn malformed_length(what: &str, len: i64) -> Self {
        Self {
            msg: format!("malformed {} length: {}", what, len),
            kind: ErrorKind::MalformedLength(len),
        }
    }

    pub(crate) fn nonunicode(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid string, non-unicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Nonunicode(data.to_vec()),
        }
    }

    pub(crate) fn depth_limit() -> Self {
        Self {
            msg: format!("nesting exceeds the maximum depth of {}", MAX_DEPTH),
            kind: ErrorKind::DepthLimitExceeded,
        }
    }

    pub(crate) fn no_root_compound(id: u8) -> Self {
        Self {
            msg: format!("invalid nbt: root tag kind {} is not a compound", id),
            kind: ErrorKind::NoRootCompound(id),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::truncated(),
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;
