//! In-process stand-in for the TMDB v3 API.
//!
//! Responses are queued either for a specific path or on a shared FIFO;
//! a path queue wins when both have something. Every request is recorded.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decoded query parameters, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let raw = self.query.as_deref().unwrap_or_default();
        url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Default for MockResponse {
    /// An empty listing.
    fn default() -> Self {
        Self::listing(&[], 0, 1)
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// TMDB-style error payload with the given status.
    pub fn error(status: u16) -> Self {
        let body = json!({
            "success": false,
            "status_code": 34,
            "status_message": format!("The resource you requested could not be found ({status})."),
        });
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// A listing page of `(id, title)` results.
    pub fn listing(movies: &[(u64, &str)], total_pages: u32, page: u32) -> Self {
        let results: Vec<_> = movies
            .iter()
            .map(|(id, title)| json!({ "id": id, "title": title, "genre_ids": [] }))
            .collect();
        let total_results = results.len();
        let body = json!({
            "page": page,
            "results": results,
            "total_pages": total_pages,
            "total_results": total_results,
        });
        Self::json(&body.to_string())
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Default)]
struct Queues {
    by_path: HashMap<String, VecDeque<MockResponse>>,
    fifo: VecDeque<MockResponse>,
}

#[derive(Clone, Default)]
struct Shared {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    queues: Arc<Mutex<Queues>>,
}

pub struct MockTmdb {
    pub addr: SocketAddr,
    shared: Shared,
    stop: watch::Sender<bool>,
}

impl MockTmdb {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new().fallback(respond).with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock TMDB server");
        let addr = listener.local_addr().expect("mock server address");

        let (stop, mut stopped) = watch::channel(false);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stopped.changed().await;
                })
                .await;
        });

        Self { addr, shared, stop }
    }

    /// Queue a response for whichever request comes next.
    pub async fn enqueue_response(&self, response: MockResponse) {
        self.shared.queues.lock().await.fifo.push_back(response);
    }

    /// Queue a response for the next request to `path` (e.g. `/3/movie/603`).
    pub async fn respond_to(&self, path: &str, response: MockResponse) {
        self.shared
            .queues
            .lock()
            .await
            .by_path
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.shared.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockTmdb {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

async fn respond(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    shared.requests.lock().await.push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
    });

    let response = {
        let mut queues = shared.queues.lock().await;
        let from_path = queues
            .by_path
            .get_mut(uri.path())
            .and_then(VecDeque::pop_front);
        from_path
            .or_else(|| queues.fifo.pop_front())
            .unwrap_or_default()
    };

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
