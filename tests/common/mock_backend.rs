//! Mock profile server: records every request and answers from per-path
//! queues, falling back to a shared queue.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

/// What the server saw.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A canned answer.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub delay: Duration,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json(r#"{"success": true}"#)
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
        }
    }

    /// An HTML error page, as a misconfigured server would return.
    pub fn html(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Default)]
struct Script {
    requests: Vec<CapturedRequest>,
    by_path: HashMap<String, VecDeque<MockResponse>>,
    fallback: VecDeque<MockResponse>,
}

impl Script {
    fn next_for(&mut self, path: &str) -> MockResponse {
        self.by_path
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .or_else(|| self.fallback.pop_front())
            .unwrap_or_default()
    }
}

type Shared = Arc<Mutex<Script>>;

pub struct MockServer {
    pub addr: SocketAddr,
    script: Shared,
    shutdown: watch::Sender<bool>,
}

impl MockServer {
    pub async fn start() -> Self {
        let script: Shared = Arc::default();
        let (shutdown, mut stopped) = watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(answer))
            .with_state(Arc::clone(&script));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stopped.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            script,
            shutdown,
        }
    }

    /// Answer for the next request to any path without its own queue.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.script.lock().await.fallback.push_back(resp);
    }

    /// Answer for the next request to `path`.
    pub async fn enqueue_for(&self, path: &str, resp: MockResponse) {
        self.script
            .lock()
            .await
            .by_path
            .entry(path.to_string())
            .or_default()
            .push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.lock().await.requests.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn answer(State(script): State<Shared>, req: Request<Body>) -> Response<Body> {
    let (parts, body) = req.into_parts();
    let headers = parts
        .headers
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();
    let body = axum::body::to_bytes(body, 8 * 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();
    let path = parts.uri.path().to_string();

    let canned = {
        let mut script = script.lock().await;
        let canned = script.next_for(&path);
        script.requests.push(CapturedRequest {
            method: parts.method.to_string(),
            path,
            headers,
            body,
        });
        canned
    };

    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", canned.content_type)
        .body(Body::from(canned.body))
        .expect("mock response")
}
