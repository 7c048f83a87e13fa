//! The HTTP/1.1 request grammar, written purely in terms of [`combinator`](crate::combinator).
//!
//! # Components
//!
//! - Request line:
//!   - [`parse_method`], [`parse_uri`], [`parse_version`]
//!   - [`sp`] and [`crlf`] separators
//!   - [`parse_request_line`] sequencing all of the above
//!
//! - Header block:
//!   - [`parse_header`] for a single `name: value` line
//!   - [`parse_headers`] for the lines up to the blank line
//!
//! - Assembly: [`parse_http_request`], the entry point used by callers
//!
//! # Error kinds
//!
//! The keyword parsers attach specific kinds on top of the generic combinators:
//! an unknown method is [`InvalidMethod`](crate::protocol::ParseError::InvalidMethod),
//! an unknown version is [`InvalidVersion`](crate::protocol::ParseError::InvalidVersion),
//! and either one fails with [`IncompleteRequest`](crate::protocol::ParseError::IncompleteRequest)
//! when there is no input left. Separators fail with
//! [`MalformedRequest`](crate::protocol::ParseError::MalformedRequest).

mod header;
mod request;
mod request_line;

pub use header::{parse_header, parse_headers};
pub use request::parse_http_request;
pub use request_line::{crlf, parse_method, parse_request_line, parse_uri, parse_version, sp};

use crate::protocol::ParseError;

pub(crate) const CRLF: &str = "\r\n";

fn utf8(bytes: &[u8], error: ParseError) -> Result<String, ParseError> {
    std::str::from_utf8(bytes).map(str::to_owned).or(Err(error))
}
