//! Error types for decoding operations

use crate::Kind;
use bytes::Bytes;
use std::borrow::Cow;
use thiserror::Error;

/// Error type for decoding operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("can't decode into absent target {0}")]
    InvalidTarget(&'static str),
    #[error("invalid crc code: {got:#010x}, want: {want:#010x}")]
    CrcMismatch { got: u32, want: u32 },
    #[error("read crc: {0}")]
    CrcRead(#[source] Box<Error>),
    #[error("read bitset: {0}")]
    BitsetRead(#[source] Box<Error>),
    #[error("object with type code {code:#010x} not registered ({} bytes unread)", .remainder.len())]
    UnknownType { code: u32, remainder: Bytes },
    #[error("unsupported shape: {0}")]
    UnsupportedShape(Kind),
    #[error("invalid bool constructor: {0:#010x}")]
    InvalidBool(u32),
    #[error("invalid utf-8 in string")]
    InvalidUtf8,
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("invalid byte string prefix: {0:#04x}")]
    InvalidMessagePrefix(u8),
    #[error("{object} has no field at index {index}")]
    MissingField { object: &'static str, index: usize },
    #[error("max depth exceeded: {0}")]
    DepthExceeded(usize),
    #[error("type code {code:#010x} already registered by {existing}, can't register {duplicate}")]
    DuplicateTypeCode {
        code: u32,
        existing: &'static str,
        duplicate: &'static str,
    },
    #[error("{context}: {source}")]
    Context {
        context: Cow<'static, str>,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps `self` with a human readable context, keeping the original error reachable
    /// through [Error::root].
    pub(crate) fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the error that started the failure, skipping every [Error::Context] layer.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Self::Context { source, .. } = err {
            err = source;
        }
        err
    }

    /// Returns the type code and unread bytes if decoding stopped at an unregistered type.
    pub fn unknown_type(&self) -> Option<(u32, &Bytes)> {
        match self.root() {
            Self::UnknownType { code, remainder } => Some((*code, remainder)),
            _ => None,
        }
    }
}
