use std::fmt;

use crate::protocol::ParseError;

/// The request methods understood by the grammar.
///
/// Keywords are matched byte-exact, so `get` is not a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Head,
    Put,
    Delete,
    Options,
    Trace,
    Connect,
    Patch,
}

impl Method {
    /// Every method paired with its request-line keyword, in matching order.
    pub const ALL: [(&'static str, Method); 9] = [
        Method::Get.keyword(),
        Method::Post.keyword(),
        Method::Head.keyword(),
        Method::Put.keyword(),
        Method::Delete.keyword(),
        Method::Options.keyword(),
        Method::Trace.keyword(),
        Method::Connect.keyword(),
        Method::Patch.keyword(),
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
            Method::Patch => "PATCH",
        }
    }

    const fn keyword(self) -> (&'static str, Method) {
        (self.as_str(), self)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Method {
    type Error = ParseError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        Method::ALL
            .iter()
            .find(|(keyword, _)| *keyword == str)
            .map(|(_, method)| *method)
            .ok_or(ParseError::InvalidMethod)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Head => http::Method::HEAD,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
            Method::Options => http::Method::OPTIONS,
            Method::Trace => http::Method::TRACE,
            Method::Connect => http::Method::CONNECT,
            Method::Patch => http::Method::PATCH,
        }
    }
}
