//! Parsed HTTP request values.
//!
//! A [`HttpRequest`] is built in one piece by
//! [`parse_http_request`](crate::grammar::parse_http_request) and handed to the
//! caller; nothing here keeps a reference to the input buffer.

use bytes::Bytes;

use crate::protocol::{Headers, Method, Version};

/// The first line of a request: `METHOD SP URI SP VERSION CRLF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// The request target exactly as received, without percent-decoding.
    pub uri: String,
    pub version: Version,
}

/// A fully parsed request.
///
/// The body is every byte that followed the header block. It is not checked or
/// truncated against `Content-Length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    request_line: RequestLine,
    headers: Headers,
    body: Bytes,
}

impl HttpRequest {
    pub fn new(request_line: RequestLine, headers: Headers, body: Bytes) -> Self {
        Self { request_line, headers, body }
    }

    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }

    pub fn method(&self) -> Method {
        self.request_line.method
    }

    pub fn uri(&self) -> &str {
        &self.request_line.uri
    }

    pub fn version(&self) -> Version {
        self.request_line.version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Looks up a header by its exact, case-sensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Returns the declared `Content-Length`, or `0` when the header is missing
    /// or is not a plain non-negative decimal number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .filter(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(0)
    }

    pub fn into_parts(self) -> (RequestLine, Headers, Bytes) {
        (self.request_line, self.headers, self.body)
    }
}

/// Converts into an `http::Request` for routers built on the `http` crate.
///
/// Header names are lower-cased by `http::HeaderName`, so two names that differ
/// only by case collapse into one multi-valued entry on the `http` side.
impl TryFrom<HttpRequest> for http::Request<Bytes> {
    type Error = http::Error;

    fn try_from(request: HttpRequest) -> Result<Self, Self::Error> {
        let (request_line, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(request_line.method))
            .uri(request_line.uri)
            .version(request_line.version.into());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder.body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(headers: &[(&str, &str)], body: &'static [u8]) -> HttpRequest {
        let request_line = RequestLine { method: Method::Post, uri: "/api/data".into(), version: Version::Http11 };
        let headers = headers.iter().map(|(name, value)| ((*name).to_string(), (*value).to_string())).collect();
        HttpRequest::new(request_line, headers, Bytes::from_static(body))
    }

    #[test]
    fn header_found() {
        let request = request_with(&[("Content-Type", "application/json")], b"");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn header_not_found() {
        let request = request_with(&[], b"");
        assert_eq!(request.header("Missing-Header"), None);
    }

    #[test]
    fn content_length_valid() {
        let request = request_with(&[("Content-Length", "42")], b"");
        assert_eq!(request.content_length(), 42);
    }

    #[test]
    fn content_length_missing() {
        assert_eq!(request_with(&[], b"").content_length(), 0);
    }

    #[test]
    fn content_length_invalid() {
        for value in ["not-a-number", "-10", "+10", "", " 10", "99999999999999999999999999"] {
            let request = request_with(&[("Content-Length", value)], b"");
            assert_eq!(request.content_length(), 0, "value {value:?}");
        }
    }

    #[test]
    fn content_length_is_case_sensitive() {
        let request = request_with(&[("content-length", "42")], b"");
        assert_eq!(request.content_length(), 0);
    }

    #[test]
    fn accessors_and_parts() {
        let request = request_with(&[("Host", "x")], b"hello");

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.uri(), "/api/data");
        assert_eq!(request.version(), Version::Http11);
        assert_eq!(request.body().as_ref(), b"hello");

        let (line, headers, body) = request.into_parts();
        assert_eq!(line.uri, "/api/data");
        assert_eq!(headers.get("Host"), Some("x"));
        assert_eq!(&body[..], b"hello");
    }

    #[test]
    fn into_http_request() {
        let request = request_with(&[("Host", "example.com"), ("X-Trace", "abc")], b"{}");

        let request = http::Request::<Bytes>::try_from(request).unwrap();

        assert_eq!(request.method(), &http::Method::POST);
        assert_eq!(request.uri().path(), "/api/data");
        assert_eq!(request.version(), http::Version::HTTP_11);
        assert_eq!(request.headers().get(http::header::HOST).unwrap(), "example.com");
        assert_eq!(request.headers().get("x-trace").unwrap(), "abc");
        assert_eq!(request.body().as_ref(), b"{}");
    }

    #[test]
    fn into_http_request_rejects_invalid_header_name() {
        let request = request_with(&[("Bad Name", "x")], b"");
        assert!(http::Request::<Bytes>::try_from(request).is_err());
    }
}
