use std::io;
use thiserror::Error;

/// The closed set of reasons a request can be rejected by the grammar.
///
/// `IncompleteRequest` is the only kind a caller may recover from: it means the
/// buffer ended before a required token, so the caller should read more bytes and
/// parse again from the start.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("invalid http method")]
    InvalidMethod,

    #[error("invalid http uri")]
    InvalidUri,

    #[error("invalid http version")]
    InvalidVersion,

    #[error("invalid header")]
    InvalidHeader,

    #[error("incomplete request")]
    IncompleteRequest,

    #[error("malformed request")]
    MalformedRequest,
}

impl ParseError {
    /// Whether re-parsing with a longer buffer could succeed.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteRequest)
    }
}

/// Errors surfaced by [`RequestDecoder`](crate::codec::RequestDecoder) while framing a byte stream.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("request error: {source}")]
    Parse {
        #[from]
        source: ParseError,
    },

    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("body size too large, declared: {declared_size} exceed the limit {max_size}")]
    TooLargeBody { declared_size: usize, max_size: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl DecodeError {
    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn too_large_body(declared_size: usize, max_size: usize) -> Self {
        Self::TooLargeBody { declared_size, max_size }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
