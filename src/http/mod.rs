//! HTTP plumbing: request description, transport, envelope decoding and the
//! session-aware client

pub mod client;
pub mod envelope;
pub mod request;
pub mod transport;

pub use client::ApiClient;
pub use envelope::{decode, Envelope, SUCCESS_CODE};
pub use request::{ApiRequest, FilePart, RequestBody, TOKEN_HEADER};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
