//! The retrieve orchestrator: build URL, issue request, parse, transform.

use crate::query::RetrieveOptions;
use crate::transform::{transform_payload, RecordPage};
use crate::transport::{ReqwestTransport, RetrieveError, Transport};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Client for the managed records endpoint.
///
/// Holds only immutable configuration behind `Arc`, so a clone can be handed
/// to each caller and concurrent [`retrieve`](Self::retrieve) calls are
/// independent.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    endpoint: Url,
    transport: Arc<dyn Transport>,
}

impl RecordsClient {
    /// Build a client for `endpoint` using the reqwest-backed transport.
    pub fn new(endpoint: Url) -> Self {
        Self::with_transport(endpoint, Arc::new(ReqwestTransport::new()))
    }

    /// Build a client with an injected transport. Tests pass a mock here.
    pub fn with_transport(endpoint: Url, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// Fetch and transform one page of records.
    ///
    /// This is best-effort: any failure (non-200 status, body-parse error,
    /// transport error) is logged once and collapsed to `None`. Callers must
    /// treat `None` as "request failed", never as an empty page.
    pub async fn retrieve(&self, options: &RetrieveOptions) -> Option<RecordPage> {
        match self.try_retrieve(options).await {
            Ok(page) => Some(page),
            Err(err) => {
                tracing::warn!("record retrieval failed: {}", err);
                None
            }
        }
    }

    async fn try_retrieve(&self, options: &RetrieveOptions) -> Result<RecordPage, RetrieveError> {
        let url = options.build_query().to_url(&self.endpoint);
        tracing::debug!("[client] GET {}", url);

        let response = self.transport.get(&url).await?;
        let status = response.status();
        if status != 200 {
            return Err(RetrieveError::Status { code: status });
        }

        let body = response.json().await?;
        let data = match body {
            Value::Array(items) => items,
            other => {
                return Err(RetrieveError::Parse(format!(
                    "expected a JSON array of records, got {}",
                    other
                )))
            }
        };

        let page = transform_payload(&data, options.current_page());
        tracing::debug!(
            "[client] transformed {} records into page ids={} open={}",
            data.len(),
            page.ids.len(),
            page.open.len()
        );
        Ok(page)
    }
}
