//! Stream framing for the request parser.
//!
//! [`parse_http_request`](crate::parse_http_request) needs one complete message
//! per call and never reads from a socket. [`RequestDecoder`] bridges the gap: it
//! implements `tokio_util::codec::Decoder`, buffers until a whole request is
//! available, and then parses it in one go.
//!
//! # Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use parsec_http::codec::RequestDecoder;
//! use tokio::net::TcpStream;
//! use tokio_util::codec::FramedRead;
//!
//! # async fn run(stream: TcpStream) {
//! let mut requests = FramedRead::new(stream, RequestDecoder::new());
//! while let Some(request) = requests.next().await {
//!     match request {
//!         Ok(request) => println!("{} {}", request.method(), request.uri()),
//!         Err(e) => {
//!             eprintln!("bad request: {e}");
//!             break;
//!         }
//!     }
//! }
//! # }
//! ```
//!
//! # Limits
//!
//! - Maximum head size: [`DEFAULT_MAX_HEADER_BYTES`] unless configured
//! - Maximum declared body size: [`DEFAULT_MAX_BODY_BYTES`] unless configured
//! - Bodies are framed by `Content-Length` only; chunked transfer coding is not
//!   supported

mod request_decoder;

pub use request_decoder::{DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_HEADER_BYTES, RequestDecoder};
