//! Local HTTP stub standing in for the profile host and the shortener.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Router;
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What every request gets back.
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl StubReply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

struct StubState {
    reply: StubReply,
    /// Path and query of every request, in arrival order.
    requests: Mutex<Vec<String>>,
}

pub struct StubServer {
    pub addr: SocketAddr,
    state: Arc<StubState>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(reply: StubReply) -> Self {
        let state = Arc::new(StubState {
            reply,
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(State(state): State<Arc<StubState>>, uri: Uri) -> (StatusCode, String) {
    state.requests.lock().push(uri.to_string());
    if state.reply.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.reply.delay_ms)).await;
    }
    let status = StatusCode::from_u16(state.reply.status).unwrap_or(StatusCode::OK);
    (status, state.reply.body.clone())
}
