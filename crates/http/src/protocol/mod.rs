//! Shared data types of the parser.
//!
//! # Components
//!
//! - **Request values** ([`request`]): the results of a successful parse
//!   - [`HttpRequest`]: request line, headers and body in one value
//!   - [`RequestLine`]: method, opaque URI and version
//!
//! - **Tokens**: the closed keyword sets
//!   - [`Method`]: the nine request methods
//!   - [`Version`]: `HTTP/1.0` and `HTTP/1.1`
//!
//! - **Headers** ([`header`]): [`Headers`], a first-occurrence-wins map with
//!   case-sensitive names
//!
//! - **Error Handling** ([`error`]):
//!   - [`ParseError`]: why the grammar rejected an input
//!   - [`DecodeError`]: framing errors of the stream decoder
//!
//! All values are immutable once built and own their data.

mod method;
pub use method::Method;

mod version;
pub use version::Version;

mod header;
pub use header::Headers;

mod request;
pub use request::HttpRequest;
pub use request::RequestLine;

mod error;
pub use error::DecodeError;
pub use error::ParseError;
