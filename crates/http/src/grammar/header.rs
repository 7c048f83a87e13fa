//! Parsers for header fields and the header block.

use tracing::trace;

use crate::combinator::{ParseResult, Parser, is_space, literal, take_until, take_while, terminated, with_error};
use crate::grammar::{CRLF, crlf, utf8};
use crate::protocol::{Headers, ParseError};

/// Parses one `name: value CRLF` line.
///
/// The name is everything before the first colon of the line, kept byte-exact.
/// Whitespace after the colon is skipped, except CR; the value runs to the end
/// of the line.
///
/// # Errors
///
/// Fails with [`ParseError::InvalidHeader`] if the line has no CRLF, has no
/// colon, or is not valid UTF-8.
pub fn parse_header<'a>() -> impl Parser<'a, (String, String)> {
    let line = with_error(terminated(take_until(CRLF), crlf()), ParseError::InvalidHeader);
    let name = with_error(terminated(take_until(":"), literal(":")), ParseError::InvalidHeader);
    let leading_space = take_while(|byte| is_space(byte) && byte != b'\r');

    move |input: &'a [u8]| -> ParseResult<'a, (String, String)> {
        let (field, rest) = line.parse(input)?;
        let (field_name, field_value) = name.parse(field)?;
        let (_, field_value) = leading_space.parse(field_value)?;

        let field_name = utf8(field_name, ParseError::InvalidHeader)?;
        let field_value = utf8(field_value, ParseError::InvalidHeader)?;
        Ok(((field_name, field_value), rest))
    }
}

/// Parses header lines up to and including the blank line that ends the block.
///
/// When a name repeats, the first value is kept and later ones are discarded.
///
/// # Errors
///
/// Propagates the first [`parse_header`] failure, so input without the blank
/// line fails with [`ParseError::InvalidHeader`].
pub fn parse_headers<'a>() -> impl Parser<'a, Headers> {
    let end_of_headers = crlf();
    let header = parse_header();

    move |mut input: &'a [u8]| -> ParseResult<'a, Headers> {
        let mut headers = Headers::new();
        loop {
            if let Ok(((), rest)) = end_of_headers.parse(input) {
                return Ok((headers, rest));
            }

            let ((name, value), rest) = header.parse(input)?;
            if headers.contains_key(&name) {
                trace!(header = %name, "discard duplicate header");
            } else {
                headers.insert(name, value);
            }
            input = rest;
        }
    }
}
