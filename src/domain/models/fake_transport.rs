use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Notify;

use super::FetchError;
use super::RawResponse;
use super::Transport;

enum Reply {
    Respond(u16, String),
    Fail(String),
    Panic,
}

/// In-memory transport that records every request body it is handed.
pub struct FakeTransport {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    sent: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl FakeTransport {
    fn new(reply: Reply) -> FakeTransport {
        return FakeTransport {
            reply,
            gate: None,
            sent: Arc::new(Mutex::new(vec![])),
            calls: Arc::new(AtomicUsize::new(0)),
        };
    }

    pub fn responding(status: u16, body: &str) -> FakeTransport {
        return FakeTransport::new(Reply::Respond(status, body.to_string()));
    }

    pub fn failing(reason: &str) -> FakeTransport {
        return FakeTransport::new(Reply::Fail(reason.to_string()));
    }

    pub fn panicking() -> FakeTransport {
        return FakeTransport::new(Reply::Panic);
    }

    /// Holds every send until the gate is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> FakeTransport {
        self.gate = Some(gate);
        return self;
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        return self.calls.clone();
    }

    pub fn sent(&self) -> Arc<Mutex<Vec<String>>> {
        return self.sent.clone();
    }
}

#[async_trait]
impl Transport for FakeTransport {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn send(&self, body: String) -> Result<RawResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(body);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            Reply::Respond(status, body) => {
                return Ok(RawResponse {
                    status: *status,
                    body: body.to_string(),
                });
            }
            Reply::Fail(reason) => return Err(FetchError::Transport(reason.to_string())),
            Reply::Panic => panic!("transport blew up"),
        }
    }
}
