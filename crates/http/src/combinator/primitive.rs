//! Primitive parsers that inspect the input directly.

use crate::combinator::{ParseResult, Parser, map};
use crate::ensure;
use crate::protocol::ParseError;

/// Whitespace as understood by C's `isspace`: SP, HT, LF, VT, FF and CR.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Consumes exactly one byte.
///
/// # Errors
///
/// Fails with [`ParseError::IncompleteRequest`] on empty input.
pub fn one_char<'a>() -> impl Parser<'a, u8> {
    |input: &'a [u8]| -> ParseResult<'a, u8> {
        match input.split_first() {
            Some((&byte, rest)) => Ok((byte, rest)),
            None => Err(ParseError::IncompleteRequest),
        }
    }
}

/// Consumes one byte if it satisfies `predicate`.
///
/// # Errors
///
/// - [`ParseError::IncompleteRequest`] on empty input
/// - [`ParseError::MalformedRequest`] if the predicate rejects the byte
pub fn satisfy<'a, F>(predicate: F) -> impl Parser<'a, u8>
where
    F: Fn(u8) -> bool,
{
    let any = one_char();
    move |input: &'a [u8]| -> ParseResult<'a, u8> {
        let (byte, rest) = any.parse(input)?;
        ensure!(predicate(byte), ParseError::MalformedRequest);
        Ok((byte, rest))
    }
}

/// Matches `target` byte-exact at the start of the input and returns the matched bytes.
///
/// Input that is too short and input that differs both fail with
/// [`ParseError::MalformedRequest`]; the two cases are not told apart.
pub fn literal<'a, L>(target: L) -> impl Parser<'a, &'a [u8]>
where
    L: AsRef<[u8]>,
{
    move |input: &'a [u8]| -> ParseResult<'a, &'a [u8]> {
        let target = target.as_ref();
        ensure!(input.starts_with(target), ParseError::MalformedRequest);
        Ok(input.split_at(target.len()))
    }
}

/// Consumes the longest prefix whose bytes all satisfy `predicate`. Never fails.
pub fn take_while<'a, F>(predicate: F) -> impl Parser<'a, &'a [u8]>
where
    F: Fn(u8) -> bool,
{
    move |input: &'a [u8]| -> ParseResult<'a, &'a [u8]> {
        let len = input.iter().position(|&byte| !predicate(byte)).unwrap_or(input.len());
        Ok(input.split_at(len))
    }
}

/// Skips any amount of whitespace, including none.
pub fn spaces<'a>() -> impl Parser<'a, ()> {
    map(take_while(is_space), |_| ())
}

/// Consumes everything before the first occurrence of `delimiter`.
///
/// The delimiter itself is left at the start of the remainder.
///
/// # Errors
///
/// Fails with [`ParseError::IncompleteRequest`] if the delimiter does not occur
/// in the input.
pub fn take_until<'a, D>(delimiter: D) -> impl Parser<'a, &'a [u8]>
where
    D: AsRef<[u8]>,
{
    move |input: &'a [u8]| -> ParseResult<'a, &'a [u8]> {
        let position = find(input, delimiter.as_ref()).ok_or(ParseError::IncompleteRequest)?;
        Ok(input.split_at(position))
    }
}

pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    match needle {
        [] => Some(0),
        [byte] => haystack.iter().position(|b| b == byte),
        _ => haystack.windows(needle.len()).position(|window| window == needle),
    }
}
