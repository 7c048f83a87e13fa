//! Property tests for the combinators and the request grammar.

use parsec_http::combinator::{Parser, boxed, choice_of, literal, many, many1, satisfy, spaces, take_until, with_error};
use parsec_http::grammar::{parse_headers, parse_request_line};
use parsec_http::{Method, ParseError, Version, parse_http_request};
use proptest::prelude::*;

// ========================================
// Strategies
// ========================================

fn http_method() -> impl Strategy<Value = (&'static str, Method)> {
    prop::sample::select(Method::ALL.to_vec())
}

fn http_version() -> impl Strategy<Value = (&'static str, Version)> {
    prop::sample::select(Version::ALL.to_vec())
}

// request target: visible ASCII, no whitespace
fn request_target() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('!', '~'), 1..=64).prop_map(|chars| chars.into_iter().collect())
}

fn header_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![prop::char::range('a', 'z'), prop::char::range('A', 'Z'), prop::char::range('0', '9'), Just('-')],
        1..=32,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// value without leading whitespace, so it survives the skip after the colon
fn header_value() -> impl Strategy<Value = String> {
    (prop::char::range('!', '~'), proptest::collection::vec(prop_oneof![prop::char::range('!', '~'), Just(' ')], 0..=32))
        .prop_map(|(first, rest)| std::iter::once(first).chain(rest).collect())
}

// ========================================
// Combinators
// ========================================

proptest! {
    #[test]
    fn spaces_is_idempotent(input in proptest::collection::vec(any::<u8>(), 0..64)) {
        let (_, rest) = spaces().parse(&input).unwrap();
        let (_, again) = spaces().parse(rest).unwrap();
        prop_assert_eq!(again, rest);
    }

    #[test]
    fn many_never_fails(input in proptest::collection::vec(any::<u8>(), 0..64)) {
        let digit = satisfy(|b| b.is_ascii_digit());
        let (values, rest) = many(digit).parse(&input).unwrap();

        let expected = input.iter().take_while(|b| b.is_ascii_digit()).count();
        prop_assert_eq!(values.len(), expected);
        prop_assert_eq!(&values[..], &input[..expected]);
        prop_assert_eq!(rest, &input[expected..]);
    }

    #[test]
    fn many1_fails_only_when_first_attempt_fails(input in proptest::collection::vec(any::<u8>(), 0..64)) {
        let digit = || satisfy(|b| b.is_ascii_digit());

        match digit().parse(&input) {
            Err(first_error) => {
                prop_assert_eq!(many1(digit()).parse(&input), Err(first_error));
            }
            Ok((first, rest)) => {
                let (values, end) = many1(digit()).parse(&input).unwrap();
                let (tail, tail_end) = many(digit()).parse(rest).unwrap();

                prop_assert_eq!(values[0], first);
                prop_assert_eq!(&values[1..], &tail[..]);
                prop_assert_eq!(end, tail_end);
            }
        }
    }

    #[test]
    fn choice_of_fails_generically(input in "[a-z]{0,16}") {
        let alternatives = vec![
            boxed(with_error(literal("0"), ParseError::InvalidHeader)),
            boxed(take_until("#")),
            boxed(with_error(literal("1"), ParseError::InvalidUri)),
        ];
        prop_assert_eq!(choice_of(alternatives).parse(input.as_bytes()), Err(ParseError::MalformedRequest));
    }

    #[test]
    fn choice_of_returns_first_success(input in "[0-9]{1,16}") {
        let alternatives = vec![boxed(literal("x")), boxed(take_until("")), boxed(literal(&input[..1]))];
        let (value, rest) = choice_of(alternatives).parse(input.as_bytes()).unwrap();

        prop_assert!(value.is_empty());
        prop_assert_eq!(rest, input.as_bytes());
    }

    // ========================================
    // Grammar
    // ========================================

    #[test]
    fn request_line_round_trip(
        (method_str, method) in http_method(),
        uri in request_target(),
        (version_str, version) in http_version(),
        suffix in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut input = format!("{method_str} {uri} {version_str}\r\n").into_bytes();
        input.extend_from_slice(&suffix);

        let (line, rest) = parse_request_line().parse(&input).unwrap();

        prop_assert_eq!(line.method, method);
        prop_assert_eq!(line.uri, uri);
        prop_assert_eq!(line.version, version);
        prop_assert_eq!(rest, &suffix[..]);
    }

    #[test]
    fn headers_keep_first_occurrence(
        name in header_name(),
        first in header_value(),
        second in header_value(),
    ) {
        let input = format!("{name}: {first}\r\n{name}: {second}\r\n\r\n");
        let (headers, rest) = parse_headers().parse(input.as_bytes()).unwrap();

        prop_assert_eq!(headers.len(), 1);
        prop_assert_eq!(headers.get(&name), Some(first.as_str()));
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn body_is_the_whole_remainder(
        body in proptest::collection::vec(any::<u8>(), 0..256),
        declared in 0usize..512,
    ) {
        let mut input = format!("POST /upload HTTP/1.1\r\nContent-Length: {declared}\r\n\r\n").into_bytes();
        input.extend_from_slice(&body);

        let request = parse_http_request(&input).unwrap();

        prop_assert_eq!(request.content_length(), declared);
        prop_assert_eq!(&request.body()[..], &body[..]);
    }

    #[test]
    fn truncated_requests_never_succeed(cut in 0usize..27) {
        let input = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
        prop_assert!(parse_http_request(&input[..cut]).is_err());
    }
}
