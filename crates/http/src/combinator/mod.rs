//! Grammar-agnostic parser combinators over byte slices.
//!
//! A parser is any value implementing [`Parser`]: given an input slice it either
//! returns the parsed value together with the unconsumed remainder, or a
//! [`ParseError`]. Parsers never mutate their input and hold no state, so the
//! same parser can be applied any number of times, from any number of threads.
//!
//! # Components
//!
//! - Primitives, which look at the input directly:
//!   - [`one_char`], [`satisfy`], [`literal`]
//!   - [`take_while`], [`take_until`], [`spaces`]
//!
//! - Combinators, which build new parsers out of existing ones:
//!   - [`sequence`], [`preceded`], [`terminated`]
//!   - [`choice`], [`choice_of`]
//!   - [`map`], [`with_error`], [`peek`]
//!   - [`many`], [`many1`]
//!   - [`boxed`] to erase the type of a parser
//!
//! # Example
//!
//! ```
//! use parsec_http::combinator::{literal, map, sequence, take_until, Parser};
//!
//! let field = map(sequence(take_until(":"), literal(":")), |(name, _)| name);
//!
//! let (name, rest) = field.parse(b"Host:localhost").unwrap();
//! assert_eq!(name, b"Host");
//! assert_eq!(rest, b"localhost");
//! ```
//!
//! # Failure behavior
//!
//! Every combinator is fail-fast: the first failing inner parser decides the
//! error, and nothing is retried except the alternatives of [`choice`] and
//! [`choice_of`], which each start again from the original input.

mod compose;
mod primitive;

pub use compose::{boxed, choice, choice_of, many, many1, map, peek, preceded, sequence, terminated, with_error};
pub use primitive::{is_space, literal, one_char, satisfy, spaces, take_until, take_while};
pub(crate) use primitive::find;

use crate::protocol::ParseError;

/// The outcome of applying a parser: the value and the remaining input, or an error.
pub type ParseResult<'a, T> = Result<(T, &'a [u8]), ParseError>;

/// A parser producing values of type `T` from input borrowed for `'a`.
///
/// Implemented for every `Fn(&'a [u8]) -> ParseResult<'a, T>`, so plain closures
/// and functions are parsers.
pub trait Parser<'a, T> {
    /// Applies the parser to `input`.
    ///
    /// On success the returned remainder is a suffix of `input`.
    fn parse(&self, input: &'a [u8]) -> ParseResult<'a, T>;
}

impl<'a, T, F> Parser<'a, T> for F
where
    F: Fn(&'a [u8]) -> ParseResult<'a, T>,
{
    #[inline]
    fn parse(&self, input: &'a [u8]) -> ParseResult<'a, T> {
        self(input)
    }
}

/// A type-erased parser, used where parsers of different types have to live
/// side by side, such as the alternatives given to [`choice_of`].
pub type BoxedParser<'a, T> = Box<dyn Parser<'a, T> + Send + Sync + 'a>;

impl<'a, T> Parser<'a, T> for BoxedParser<'a, T> {
    #[inline]
    fn parse(&self, input: &'a [u8]) -> ParseResult<'a, T> {
        (**self).parse(input)
    }
}
