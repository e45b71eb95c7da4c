//! Real HTTP backend: implements `Transport` using `reqwest`.
//! Inject this into `RecordsClient` in production to reach the records endpoint.

use crate::transport::connection::{RetrieveError, Transport, TransportResponse};
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use url::Url;

/// A reqwest-backed `Transport`.
///
/// The inner client carries its own connection pool, so cloning is cheap and
/// concurrent `get` calls are independent. Timeouts, if wanted, belong on the
/// `reqwest::Client` handed to [`ReqwestTransport::with_client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing client, keeping whatever pool and policy it carries.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get(
        &self,
        url: &Url,
    ) -> BoxFuture<'static, Result<Box<dyn TransportResponse>, RetrieveError>> {
        let request = self.client.get(url.clone());
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| RetrieveError::transport(e.to_string()))?;
            Ok(Box::new(ReqwestResponse { inner: response }) as Box<dyn TransportResponse>)
        }
        .boxed()
    }
}

struct ReqwestResponse {
    inner: reqwest::Response,
}

impl TransportResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn json(self: Box<Self>) -> BoxFuture<'static, Result<Value, RetrieveError>> {
        async move {
            self.inner.json::<Value>().await.map_err(|e| {
                if e.is_decode() {
                    RetrieveError::Parse(e.to_string())
                } else {
                    RetrieveError::transport(e.to_string())
                }
            })
        }
        .boxed()
    }
}
