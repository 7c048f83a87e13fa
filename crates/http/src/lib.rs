//! HTTP/1.1 request parsing built from small parser combinators
//!
//! This crate turns one fully buffered HTTP/1.1 request into a structured
//! [`HttpRequest`], or into a single [`ParseError`] explaining why it could not.
//! The grammar is written entirely in terms of a tiny combinator library, so
//! every piece of it is an ordinary, reusable parser value.
//!
//! # Features
//!
//! - Generic combinators over byte slices (`sequence`, `choice`, `many`, ...)
//! - A request grammar assembled purely by composing them
//! - Typed, fail-fast errors with no partial results
//! - Stateless parsers that can be shared freely between threads
//! - A `tokio_util` decoder for framing requests out of a byte stream
//!
//! # Example
//!
//! ```
//! use parsec_http::{parse_http_request, Method, ParseError};
//!
//! let request = parse_http_request(b"POST /api HTTP/1.1\r\nContent-Length: 2\r\n\r\n{}").unwrap();
//! assert_eq!(request.method(), Method::Post);
//! assert_eq!(request.content_length(), 2);
//! assert_eq!(&request.body()[..], b"{}");
//!
//! assert_eq!(parse_http_request(b""), Err(ParseError::IncompleteRequest));
//! ```
//!
//! # Architecture
//!
//! The crate is organized in layers, each depending only on the ones below:
//!
//! - [`combinator`]: grammar-agnostic primitives and combinators
//! - [`grammar`]: HTTP/1.1 parsers and the [`parse_http_request`] entry point
//! - [`protocol`]: request values and error types
//! - [`codec`]: stream framing on top of the grammar
//!
//! # Error Handling
//!
//! - [`ParseError`]: why the grammar rejected an input. Only
//!   [`ParseError::IncompleteRequest`] is worth retrying, with more bytes and
//!   from the start.
//! - [`protocol::DecodeError`]: framing and size-limit errors of
//!   [`codec::RequestDecoder`]
//!
//! # Limitations
//!
//! - No chunked transfer decoding and no incremental parsing; callers supply
//!   whole messages
//! - No percent-decoding of the request target
//! - Header names are matched case-sensitively and the first of duplicate
//!   headers wins

pub mod codec;
pub mod combinator;
pub mod grammar;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

pub use grammar::parse_http_request;
pub use protocol::{Headers, HttpRequest, Method, ParseError, RequestLine, Version};
