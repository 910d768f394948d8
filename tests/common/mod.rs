//! Shared test utilities and fake catalog sources.

#![allow(dead_code, unused_imports)]

pub mod mock_tmdb;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moviebase::catalog::{
    CatalogSource, FetchError, Genre, MovieDetail, MoviePage, MovieSummary, PageRequest, PAGE_CAP,
};
use moviebase::config::{ApiConfig, PreferenceStore, SecureString};
use moviebase::catalog::TmdbClient;
use moviebase::store::{CatalogSnapshot, CatalogStore};
use parking_lot::Mutex;
use tempfile::TempDir;
use tokio::sync::oneshot;

pub fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/{id}.jpg")),
        release_date: Some("2020-01-01".to_string()),
        vote_average: Some(7.0),
        genre_ids: vec![28],
    }
}

pub fn detail(id: u64, title: &str) -> MovieDetail {
    MovieDetail {
        id,
        title: title.to_string(),
        poster_path: None,
        release_date: Some("1999-03-31".to_string()),
        vote_average: Some(8.2),
        genre_ids: Vec::new(),
        backdrop_path: None,
        tagline: Some("Welcome to the Real World.".to_string()),
        overview: Some("A hacker learns the truth.".to_string()),
        runtime: Some(136),
        budget: Some(63_000_000),
        revenue: Some(463_517_383),
        genres: vec![Genre {
            id: 28,
            name: "Action".to_string(),
        }],
        production_companies: Vec::new(),
        status: Some("Released".to_string()),
        original_language: Some("en".to_string()),
    }
}

pub fn page(items: Vec<MovieSummary>, total_pages: u32, page: u32) -> MoviePage {
    MoviePage {
        items,
        total_pages,
        page,
    }
}

/// Preference store in a fresh temp dir. Keep the `TempDir` alive.
pub fn temp_preferences() -> (TempDir, PreferenceStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = PreferenceStore::new(dir.path().join("preferences.toml"));
    (dir, store)
}

pub fn tmdb_client(base_url: &str, token: &str) -> TmdbClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    };
    TmdbClient::new(&api, SecureString::new(token.to_string())).expect("Failed to build client")
}

type PageGate = oneshot::Receiver<Result<MoviePage, FetchError>>;
type DetailGate = oneshot::Receiver<Result<MovieDetail, FetchError>>;

#[derive(Default)]
struct FakeInner {
    page_gates: Mutex<HashMap<u32, PageGate>>,
    detail_gates: Mutex<HashMap<String, DetailGate>>,
    page_requests: Mutex<Vec<PageRequest>>,
    detail_requests: Mutex<Vec<String>>,
    /// When set, ungated page requests are answered with generated pages.
    auto_total_pages: Mutex<Option<u32>>,
}

/// In-memory catalog source whose responses are released by the test.
///
/// Page responses are keyed by requested page number and detail responses
/// by id, so the release order is fully under the test's control.
#[derive(Clone, Default)]
pub struct FakeSource {
    inner: Arc<FakeInner>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every ungated page request immediately from a catalog of `total_pages`.
    pub fn auto(total_pages: u32) -> Self {
        let source = Self::default();
        *source.inner.auto_total_pages.lock() = Some(total_pages);
        source
    }

    pub fn page_gate(&self, page: u32) -> oneshot::Sender<Result<MoviePage, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.inner.page_gates.lock().insert(page, rx);
        tx
    }

    pub fn detail_gate(&self, id: &str) -> oneshot::Sender<Result<MovieDetail, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.inner.detail_gates.lock().insert(id.to_string(), rx);
        tx
    }

    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.inner.page_requests.lock().clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        self.inner.detail_requests.lock().clone()
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<MoviePage, FetchError> {
        self.inner.page_requests.lock().push(request.clone());
        let gate = self.inner.page_gates.lock().remove(&request.page);
        if let Some(gate) = gate {
            return gate.await.unwrap_or_else(|_| {
                Err(FetchError::Transport {
                    message: "gate dropped".to_string(),
                })
            });
        }

        let auto = *self.inner.auto_total_pages.lock();
        match auto {
            Some(total) => {
                let number = request.wire_page();
                let items = (0..request.per_page as u64)
                    .map(|i| movie(u64::from(number) * 100 + i, &format!("Movie {number}-{i}")))
                    .collect();
                Ok(page(items, total.min(PAGE_CAP), number))
            }
            None => Err(FetchError::Transport {
                message: format!("no response queued for page {}", request.page),
            }),
        }
    }

    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, FetchError> {
        self.inner.detail_requests.lock().push(id.to_string());
        let gate = self.inner.detail_gates.lock().remove(id);
        match gate {
            Some(gate) => gate.await.unwrap_or_else(|_| {
                Err(FetchError::Transport {
                    message: "gate dropped".to_string(),
                })
            }),
            None => match id.parse::<u64>() {
                Ok(numeric) => Ok(detail(numeric, &format!("Movie {id}"))),
                Err(_) => Err(FetchError::Status { status: 404 }),
            },
        }
    }
}

/// Wait until `pred` holds for the store's snapshot, or panic after two seconds.
pub async fn wait_for<S, F>(store: &CatalogStore<S>, pred: F) -> CatalogSnapshot
where
    S: CatalogSource,
    F: Fn(&CatalogSnapshot) -> bool,
{
    let mut changes = store.subscribe();
    let waited = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            let snapshot = store.snapshot();
            if pred(&snapshot) {
                return snapshot;
            }
            if changes.changed().await.is_err() {
                return store.snapshot();
            }
        }
    })
    .await;
    waited.expect("store did not reach expected state in time")
}
