//! HTTP request decoder module
//!
//! This module adapts [`parse_http_request`] to a byte stream. The parser itself
//! only accepts complete messages; the decoder's job is to wait until one is
//! buffered, cut it out of the stream, and hand it to the parser.
//!
//! # Framing
//!
//! 1. Head: bytes up to and including the first blank line (`\r\n\r\n`)
//! 2. Body: exactly `Content-Length` bytes after the head, `0` if absent
//!
//! Anything after the body stays in the buffer for the next request, so
//! pipelined requests decode one after another.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use parsec_http::codec::RequestDecoder;
//! use tokio_util::codec::Decoder;
//!
//! let mut decoder = RequestDecoder::new();
//! let mut buffer = BytesMut::from(&b"GET / HTTP/1.1\r\nHost: x\r\n"[..]);
//! assert!(decoder.decode(&mut buffer).unwrap().is_none());
//!
//! buffer.extend_from_slice(b"\r\n");
//! let request = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(request.header("Host"), Some("x"));
//! ```

use std::io;

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;
use tracing::{debug, trace};

use crate::combinator::find;
use crate::ensure;
use crate::grammar::parse_http_request;
use crate::protocol::{DecodeError, HttpRequest};

/// Default limit for the request line plus headers.
pub const DEFAULT_MAX_HEADER_BYTES: usize = 8 * 1024;

/// Default limit for a declared body.
pub const DEFAULT_MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

const END_OF_HEAD: &[u8] = b"\r\n\r\n";

/// A decoder that frames HTTP requests out of a byte stream.
///
/// # State Machine
///
/// The decoder keeps its state in the `pending` field:
/// - `None`: waiting for a complete head
/// - `Some(PendingRequest)`: head parsed, waiting for the declared body
///
/// `scanned` counts the buffered bytes already searched for the end of the head,
/// so a head arriving in many small reads is not rescanned from the start.
#[derive(Debug)]
pub struct RequestDecoder {
    max_header_bytes: usize,
    max_body_bytes: usize,
    scanned: usize,
    pending: Option<PendingRequest>,
}

/// A parsed head whose body has not fully arrived yet.
#[derive(Debug)]
struct PendingRequest {
    head: HttpRequest,
    body_size: usize,
}

impl RequestDecoder {
    /// Creates a decoder with [`DEFAULT_MAX_HEADER_BYTES`] and [`DEFAULT_MAX_BODY_BYTES`].
    pub fn new() -> Self {
        Default::default()
    }

    #[must_use]
    pub fn with_max_header_bytes(mut self, max_header_bytes: usize) -> Self {
        self.max_header_bytes = max_header_bytes;
        self
    }

    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Parses the head once it is fully buffered and removes it from `src`.
    fn decode_head(&mut self, src: &mut BytesMut) -> Result<Option<PendingRequest>, DecodeError> {
        // the terminator may straddle the previous scan boundary
        let start = self.scanned.saturating_sub(END_OF_HEAD.len() - 1).min(src.len());
        let Some(head_end) = find(&src[start..], END_OF_HEAD).map(|position| start + position) else {
            ensure!(src.len() <= self.max_header_bytes, DecodeError::too_large_header(src.len(), self.max_header_bytes));
            self.scanned = src.len();
            trace!(buffered = src.len(), "request head is not complete");
            return Ok(None);
        };
        self.scanned = 0;

        let head_size = head_end + END_OF_HEAD.len();
        ensure!(head_size <= self.max_header_bytes, DecodeError::too_large_header(head_size, self.max_header_bytes));

        let head = parse_http_request(&src[..head_size])?;
        let body_size = head.content_length();
        ensure!(body_size <= self.max_body_bytes, DecodeError::too_large_body(body_size, self.max_body_bytes));

        trace!(head_size, body_size, "parsed request head");
        src.advance(head_size);
        Ok(Some(PendingRequest { head, body_size }))
    }
}

impl Default for RequestDecoder {
    fn default() -> Self {
        Self { max_header_bytes: DEFAULT_MAX_HEADER_BYTES, max_body_bytes: DEFAULT_MAX_BODY_BYTES, scanned: 0, pending: None }
    }
}

impl Decoder for RequestDecoder {
    type Item = HttpRequest;
    type Error = DecodeError;

    /// Attempts to decode one request from the provided buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))`: a complete request was removed from the buffer
    /// - `Ok(None)`: need more data to proceed
    /// - `Err(_)`: the head did not parse, or a size limit was exceeded
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let pending = match self.pending.take() {
            Some(pending) => pending,
            None => match self.decode_head(src)? {
                Some(pending) => pending,
                None => return Ok(None),
            },
        };

        if src.len() < pending.body_size {
            src.reserve(pending.body_size - src.len());
            self.pending = Some(pending);
            return Ok(None);
        }

        let body = src.split_to(pending.body_size).freeze();
        let (request_line, headers, _) = pending.head.into_parts();
        Ok(Some(HttpRequest::new(request_line, headers, body)))
    }

    /// Like [`decode`](Self::decode), but a request cut off by the end of the
    /// stream is an error, whether it stopped inside the head or the body.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(request) = self.decode(src)? {
            return Ok(Some(request));
        }

        let pending = self.pending.take();
        if src.is_empty() && pending.is_none() {
            return Ok(None);
        }

        debug!(
            buffered = src.len(),
            missing_body = pending.map_or(0, |pending| pending.body_size - src.len()),
            "stream closed in the middle of a request"
        );
        self.scanned = 0;
        Err(DecodeError::io(io::Error::from(io::ErrorKind::UnexpectedEof)))
    }
}
