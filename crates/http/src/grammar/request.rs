//! Assembly of the request line and header block into a whole request.

use bytes::Bytes;
use tracing::{debug, trace};

use crate::combinator::{Parser, sequence};
use crate::grammar::{parse_headers, parse_request_line};
use crate::protocol::{HttpRequest, ParseError};

/// Parses one complete, fully buffered request.
///
/// The request line and the header block are parsed in order; every byte after
/// the blank line becomes the body, whatever `Content-Length` says.
///
/// # Errors
///
/// Returns the first [`ParseError`] raised anywhere in the request. No partial
/// request is produced. [`ParseError::IncompleteRequest`] means the input ended
/// too early; parse again from the start once more bytes are available.
///
/// # Example
///
/// ```
/// use parsec_http::{parse_http_request, Method, Version};
///
/// let request = parse_http_request(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
///
/// assert_eq!(request.method(), Method::Get);
/// assert_eq!(request.uri(), "/");
/// assert_eq!(request.version(), Version::Http11);
/// assert_eq!(request.header("Host"), Some("x"));
/// assert!(request.body().is_empty());
/// ```
pub fn parse_http_request(input: &[u8]) -> Result<HttpRequest, ParseError> {
    let head = sequence(parse_request_line(), parse_headers());

    match head.parse(input) {
        Ok(((request_line, headers), body)) => {
            trace!(
                method = %request_line.method,
                uri = %request_line.uri,
                version = %request_line.version,
                header_count = headers.len(),
                body_size = body.len(),
                "parsed http request"
            );
            Ok(HttpRequest::new(request_line, headers, Bytes::copy_from_slice(body)))
        }
        Err(e) => {
            debug!(cause = %e, input_size = input.len(), "failed to parse http request");
            Err(e)
        }
    }
}
