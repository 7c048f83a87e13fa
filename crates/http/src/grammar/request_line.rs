//! Parsers for the request line: `METHOD SP URI SP VERSION CRLF`.

use crate::combinator::{
    ParseResult, Parser, choice_of, is_space, literal, map, one_char, peek, preceded, sequence, take_while, terminated,
    with_error,
};
use crate::ensure;
use crate::grammar::{CRLF, utf8};
use crate::protocol::{Method, ParseError, RequestLine, Version};

/// Matches a single space.
pub fn sp<'a>() -> impl Parser<'a, ()> {
    map(literal(" "), |_| ())
}

/// Matches the line terminator `\r\n`.
pub fn crlf<'a>() -> impl Parser<'a, ()> {
    map(literal(CRLF), |_| ())
}

/// Parses one of the nine method keywords, case-sensitively.
///
/// # Errors
///
/// - [`ParseError::IncompleteRequest`] on empty input
/// - [`ParseError::InvalidMethod`] if no keyword matches
pub fn parse_method<'a>() -> impl Parser<'a, Method> {
    let keywords = Method::ALL.into_iter().map(|(keyword, method)| map(literal(keyword), move |_| method)).collect();
    preceded(peek(one_char()), with_error(choice_of(keywords), ParseError::InvalidMethod))
}

/// Parses the request target up to the first whitespace byte.
///
/// The target is opaque: it is not percent-decoded or otherwise validated.
///
/// # Errors
///
/// Fails with [`ParseError::InvalidUri`] if the target is empty or not valid UTF-8.
pub fn parse_uri<'a>() -> impl Parser<'a, String> {
    let target = take_while(|byte| !is_space(byte));
    move |input: &'a [u8]| -> ParseResult<'a, String> {
        let (uri, rest) = target.parse(input)?;
        ensure!(!uri.is_empty(), ParseError::InvalidUri);
        Ok((utf8(uri, ParseError::InvalidUri)?, rest))
    }
}

/// Parses `HTTP/1.0` or `HTTP/1.1`.
///
/// # Errors
///
/// - [`ParseError::IncompleteRequest`] on empty input
/// - [`ParseError::InvalidVersion`] for any other token
pub fn parse_version<'a>() -> impl Parser<'a, Version> {
    let keywords = Version::ALL.into_iter().map(|(keyword, version)| map(literal(keyword), move |_| version)).collect();
    preceded(peek(one_char()), with_error(choice_of(keywords), ParseError::InvalidVersion))
}

/// Parses a complete request line including its CRLF.
///
/// Fields must be separated by exactly one space. The first field that does not
/// match decides the error; there is no recovery across fields.
pub fn parse_request_line<'a>() -> impl Parser<'a, RequestLine> {
    let line = sequence(
        terminated(parse_method(), sp()),
        sequence(terminated(parse_uri(), sp()), terminated(parse_version(), crlf())),
    );
    map(line, |(method, (uri, version))| RequestLine { method, uri, version })
}
