use std::fmt;

use crate::protocol::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    Http10,
    Http11,
}

impl Version {
    /// Every version paired with its request-line token, in matching order.
    pub const ALL: [(&'static str, Version); 2] = [Version::Http10.token(), Version::Http11.token()];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
        }
    }

    const fn token(self) -> (&'static str, Version) {
        (self.as_str(), self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        Version::ALL
            .iter()
            .find(|(token, _)| *token == str)
            .map(|(_, version)| *version)
            .ok_or(ParseError::InvalidVersion)
    }
}

impl From<Version> for http::Version {
    fn from(version: Version) -> Self {
        match version {
            Version::Http10 => http::Version::HTTP_10,
            Version::Http11 => http::Version::HTTP_11,
        }
    }
}
