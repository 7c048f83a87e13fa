use bytes::Bytes;
use futures::StreamExt;
use parsec_http::codec::RequestDecoder;
use parsec_http::parse_http_request;
use tokio_util::codec::FramedRead;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

const SINGLE: &[u8] = b"POST /api/users HTTP/1.1\r\nHost: localhost:8080\r\nContent-Type: application/json\r\nContent-Length: 17\r\n\r\n{\"name\": \"alice\"}";

const PIPELINED: &[u8] = b"GET /first HTTP/1.1\r\nHost: localhost\r\n\r\n\
    PUT /second HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc\
    GET /third HTTP/2.0\r\n\r\n";

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match parse_http_request(SINGLE) {
        Ok(request) => {
            info!(method = %request.method(), uri = request.uri(), content_length = request.content_length(), "parsed request");

            match http::Request::<Bytes>::try_from(request) {
                Ok(request) => info!(headers = request.headers().len(), "converted into http::Request"),
                Err(e) => warn!(cause = %e, "request is not representable as http::Request"),
            }
        }
        Err(e) => error!(cause = %e, "failed to parse request"),
    }

    let mut requests = FramedRead::new(PIPELINED, RequestDecoder::new());
    while let Some(result) = requests.next().await {
        match result {
            Ok(request) => info!(method = %request.method(), uri = request.uri(), body_size = request.body().len(), "decoded request"),
            Err(e) => {
                error!(cause = %e, "failed to decode request");
                break;
            }
        }
    }
}
