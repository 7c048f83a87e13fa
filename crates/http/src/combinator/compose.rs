//! Combinators that build parsers out of other parsers.

use crate::combinator::{BoxedParser, ParseResult, Parser};
use crate::protocol::ParseError;

/// Runs `first`, then `second` on what `first` left over, and pairs the values.
///
/// Fails with the error of whichever parser fails first.
pub fn sequence<'a, A, B, PA, PB>(first: PA, second: PB) -> impl Parser<'a, (A, B)>
where
    PA: Parser<'a, A>,
    PB: Parser<'a, B>,
{
    move |input: &'a [u8]| -> ParseResult<'a, (A, B)> {
        let (a, rest) = first.parse(input)?;
        let (b, rest) = second.parse(rest)?;
        Ok(((a, b), rest))
    }
}

/// Runs `prefix` then `parser`, keeping only the value of `parser`.
pub fn preceded<'a, A, B, PA, PB>(prefix: PA, parser: PB) -> impl Parser<'a, B>
where
    PA: Parser<'a, A>,
    PB: Parser<'a, B>,
{
    map(sequence(prefix, parser), |(_, value)| value)
}

/// Runs `parser` then `suffix`, keeping only the value of `parser`.
pub fn terminated<'a, A, B, PA, PB>(parser: PA, suffix: PB) -> impl Parser<'a, A>
where
    PA: Parser<'a, A>,
    PB: Parser<'a, B>,
{
    map(sequence(parser, suffix), |(value, _)| value)
}

/// Tries `first`, and on failure tries `second` on the same input.
///
/// If both fail, the error of `second` is returned.
pub fn choice<'a, T, P1, P2>(first: P1, second: P2) -> impl Parser<'a, T>
where
    P1: Parser<'a, T>,
    P2: Parser<'a, T>,
{
    move |input: &'a [u8]| -> ParseResult<'a, T> { first.parse(input).or_else(|_| second.parse(input)) }
}

/// Tries each parser in order and returns the first success.
///
/// Unlike [`choice`], the individual errors are discarded: if every alternative
/// fails (or there are none) the result is [`ParseError::MalformedRequest`].
pub fn choice_of<'a, T, P>(parsers: Vec<P>) -> impl Parser<'a, T>
where
    P: Parser<'a, T>,
{
    move |input: &'a [u8]| -> ParseResult<'a, T> {
        parsers.iter().find_map(|parser| parser.parse(input).ok()).ok_or(ParseError::MalformedRequest)
    }
}

/// Transforms the value of a successful parse. Failures pass through unchanged.
pub fn map<'a, A, B, P, F>(parser: P, f: F) -> impl Parser<'a, B>
where
    P: Parser<'a, A>,
    F: Fn(A) -> B,
{
    move |input: &'a [u8]| -> ParseResult<'a, B> { parser.parse(input).map(|(value, rest)| (f(value), rest)) }
}

/// Replaces any failure of `parser` with `error`.
pub fn with_error<'a, T, P>(parser: P, error: ParseError) -> impl Parser<'a, T>
where
    P: Parser<'a, T>,
{
    move |input: &'a [u8]| -> ParseResult<'a, T> { parser.parse(input).or(Err(error)) }
}

/// Runs `parser` without consuming any input.
pub fn peek<'a, T, P>(parser: P) -> impl Parser<'a, T>
where
    P: Parser<'a, T>,
{
    move |input: &'a [u8]| -> ParseResult<'a, T> {
        let (value, _) = parser.parse(input)?;
        Ok((value, input))
    }
}

/// Applies `parser` until it fails and collects the values in order.
///
/// Never fails; the error that ends the repetition is discarded. A success that
/// consumes no input also ends the repetition, and its value is not collected,
/// so parsers like [`spaces`](crate::combinator::spaces) cannot loop forever.
pub fn many<'a, T, P>(parser: P) -> impl Parser<'a, Vec<T>>
where
    P: Parser<'a, T>,
{
    move |input: &'a [u8]| -> ParseResult<'a, Vec<T>> {
        let mut values = Vec::new();
        let rest = repeat(&parser, input, &mut values);
        Ok((values, rest))
    }
}

/// Like [`many`], but `parser` must succeed at least once.
///
/// # Errors
///
/// Returns the error of the first attempt if it fails.
pub fn many1<'a, T, P>(parser: P) -> impl Parser<'a, Vec<T>>
where
    P: Parser<'a, T>,
{
    move |input: &'a [u8]| -> ParseResult<'a, Vec<T>> {
        let (first, rest) = parser.parse(input)?;
        let mut values = vec![first];
        let rest = repeat(&parser, rest, &mut values);
        Ok((values, rest))
    }
}

fn repeat<'a, T, P>(parser: &P, mut input: &'a [u8], values: &mut Vec<T>) -> &'a [u8]
where
    P: Parser<'a, T>,
{
    while let Ok((value, rest)) = parser.parse(input) {
        if rest.len() == input.len() {
            break;
        }
        values.push(value);
        input = rest;
    }
    input
}

/// Erases the type of `parser`.
pub fn boxed<'a, T, P>(parser: P) -> BoxedParser<'a, T>
where
    P: Parser<'a, T> + Send + Sync + 'a,
{
    Box::new(parser)
}
