pub mod connection;
mod reqwest_transport;

pub use connection::{RetrieveError, Transport, TransportResponse};
pub use reqwest_transport::ReqwestTransport;

pub use connection::MockTransport;
