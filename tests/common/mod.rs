//! Shared helpers for the retrieve integration tests.

use futures::future::BoxFuture;
use futures::FutureExt;
use managed_records::{
    MockTransport, RecordsClient, RetrieveError, TransportResponse,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{span, Event, Level, Metadata, Subscriber};
use url::Url;

pub fn endpoint() -> Url {
    Url::parse("http://localhost:3000/records").unwrap()
}

/// One record in the shape the endpoint serves.
pub fn record(id: u64, color: &str, disposition: &str) -> Value {
    json!({ "id": id, "color": color, "disposition": disposition })
}

/// A payload of `n` records cycling through the palette and dispositions.
pub fn payload(n: usize) -> Value {
    let colors = ["red", "brown", "blue", "maroon", "yellow"];
    let records: Vec<Value> = (1..=n)
        .map(|id| {
            let disposition = if id % 2 == 0 { "closed" } else { "open" };
            record(id as u64, colors[id % colors.len()], disposition)
        })
        .collect();
    Value::Array(records)
}

/// Canned response returned by a stubbed transport.
pub struct StubResponse {
    status: u16,
    body: Result<Value, RetrieveError>,
}

impl StubResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Ok(body),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: code,
            body: Ok(Value::Null),
        }
    }

    pub fn unparsable() -> Self {
        Self {
            status: 200,
            body: Err(RetrieveError::Parse("unexpected end of input".into())),
        }
    }
}

impl TransportResponse for StubResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn json(self: Box<Self>) -> BoxFuture<'static, Result<Value, RetrieveError>> {
        async move { self.body }.boxed()
    }
}

/// Subscriber that counts `warn!` events, for asserting on the diagnostics
/// emitted by the failure path. Install with `tracing::subscriber::set_default`
/// so the count covers the awaits inside `retrieve`.
pub struct WarnCounter(pub Arc<AtomicUsize>);

impl WarnCounter {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        (Self(count.clone()), count)
    }
}

impl Subscriber for WarnCounter {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        *metadata.level() == Level::WARN
    }

    fn new_span(&self, _attrs: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _id: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _id: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _id: &span::Id) {}

    fn exit(&self, _id: &span::Id) {}
}

/// A client whose transport expects exactly one GET and serves `response`.
pub fn client_serving(response: StubResponse) -> RecordsClient {
    let mut transport = MockTransport::new();
    transport.expect_get().times(1).return_once(move |_| {
        async move { Ok(Box::new(response) as Box<dyn TransportResponse>) }.boxed()
    });
    RecordsClient::with_transport(endpoint(), Arc::new(transport))
}
