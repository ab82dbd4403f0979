//! Decoder error types.
//!
//! Every error raised by this crate is fatal to the current decode call and
//! carries the byte offset at which it was observed: a single monotonically
//! increasing `total_read` cursor, since the wire format has no concept of
//! lines or columns.

use thiserror::Error;

/// A decode failure, with the byte offset at which it was detected.
#[derive(Error, Debug)]
#[error("{kind} at byte {offset}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub offset: u64,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, offset: u64) -> Self {
        Self { kind, offset }
    }
}

/// The kind of decode failure, independent of where it occurred.
#[derive(Error, Debug)]
pub enum DecodeErrorKind {
    #[error("insufficient input: requested {requested} bytes, {available} available")]
    InsufficientInput { requested: usize, available: usize },

    #[error("invalid marker byte {0:#04x}")]
    InvalidMarker(u8),

    #[error("invalid container type {0:#04x}")]
    InvalidContainerType(u8),

    #[error("negative length {0}")]
    NegativeLength(i64),

    #[error("container type without count")]
    TypedContainerWithoutCount,

    #[error("invalid UTF-8 in string or key: {0}")]
    Utf8Decode(core::str::Utf8Error),

    #[error("recursion depth exceeded")]
    RecursionExceeded,

    #[error("host factory failed: {0}")]
    HostFactoryFailure(String),

    #[error("I/O failure: {0}")]
    Io(std::io::Error),
}
