//! The catalog store: one snapshot, mutated only through intents.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::catalog::{CatalogSource, PageRequest};
use crate::config::{PreferenceError, PreferenceStore};

use super::intent::{CatalogIntent, SnapshotPatch};
use super::mvi;
use super::reducer::CatalogReducer;
use super::state::CatalogSnapshot;

/// Kind of asynchronous request. Each kind has its own generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    List,
    Detail,
}

/// Shared handle to the catalog state.
///
/// Cloning is cheap; all clones see the same snapshot. List and detail
/// fetches may be in flight at the same time. Within one kind only the most
/// recently issued request is allowed to resolve into the snapshot; older
/// resolutions are discarded.
pub struct CatalogStore<S> {
    inner: Arc<Shared<S>>,
}

struct Shared<S> {
    source: S,
    preferences: PreferenceStore,
    snapshot: RwLock<CatalogSnapshot>,
    list_generation: AtomicU64,
    detail_generation: AtomicU64,
    version: watch::Sender<u64>,
}

impl<S> Clone for CatalogStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: CatalogSource> CatalogStore<S> {
    /// Create the store. The theme flag is read from `preferences`.
    pub fn new(source: S, preferences: PreferenceStore) -> Self {
        let dark_mode = preferences.load_dark_mode();
        let (version, _) = watch::channel(0);
        Self {
            inner: Arc::new(Shared {
                source,
                preferences,
                snapshot: RwLock::new(CatalogSnapshot::with_dark_mode(dark_mode)),
                list_generation: AtomicU64::new(0),
                detail_generation: AtomicU64::new(0),
                version,
            }),
        }
    }

    /// A consistent copy of the current state.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.inner.snapshot.read().clone()
    }

    /// Receiver whose value is bumped after every applied transition.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.version.subscribe()
    }

    /// Latest generation issued for `kind`.
    pub fn generation(&self, kind: RequestKind) -> u64 {
        self.counter(kind).load(Ordering::SeqCst)
    }

    /// Start loading a page of movies.
    ///
    /// `loading` is set and `error` cleared before this returns; the returned
    /// future performs the fetch and applies its outcome.
    pub fn load_movies(&self, request: PageRequest) -> impl Future<Output = ()> + Send + 'static {
        let generation = self.issue(RequestKind::List, CatalogIntent::MoviesRequested);
        tracing::debug!(
            generation,
            collection = request.collection.api_path(),
            page = request.page,
            "List fetch submitted"
        );

        let store = self.clone();
        async move {
            let intent = match store.inner.source.fetch_page(&request).await {
                Ok(page) => CatalogIntent::MoviesLoaded { page },
                Err(error) => CatalogIntent::MoviesFailed { error },
            };
            store.resolve(RequestKind::List, generation, intent);
        }
    }

    /// Start loading one movie's details.
    ///
    /// The previous detail is dropped before this returns.
    pub fn load_detail(&self, id: impl Into<String>) -> impl Future<Output = ()> + Send + 'static {
        let id = id.into();
        let generation = self.issue(RequestKind::Detail, CatalogIntent::DetailRequested);
        tracing::debug!(generation, id = %id, "Detail fetch submitted");

        let store = self.clone();
        async move {
            let intent = match store.inner.source.fetch_detail(&id).await {
                Ok(detail) => CatalogIntent::DetailLoaded {
                    detail: Box::new(detail),
                },
                Err(error) => CatalogIntent::DetailFailed { error },
            };
            store.resolve(RequestKind::Detail, generation, intent);
        }
    }

    /// Overwrite the current page without bounds checks.
    pub fn set_current_page(&self, page: u32) {
        self.dispatch(CatalogIntent::SetCurrentPage { page });
    }

    pub fn clear_error(&self) {
        self.dispatch(CatalogIntent::ClearError);
    }

    pub fn patch(&self, patch: SnapshotPatch) {
        self.dispatch(CatalogIntent::Patch(patch));
    }

    /// Flip the theme and persist it before returning.
    ///
    /// The snapshot stays locked until the write finishes, so the stored value
    /// always matches memory once this returns. A failed write still leaves
    /// the flag flipped in memory.
    pub fn toggle_theme(&self) -> Result<bool, PreferenceError> {
        let mut guard = self.inner.snapshot.write();
        reduce_in_place(&mut guard, CatalogIntent::ToggleTheme);
        let dark_mode = guard.dark_mode;
        let persisted = self.inner.preferences.save_dark_mode(dark_mode);
        drop(guard);
        self.notify();

        if let Err(err) = &persisted {
            tracing::warn!(error = %err, dark_mode, "Theme preference not persisted");
        }
        persisted.map(|()| dark_mode)
    }

    fn counter(&self, kind: RequestKind) -> &AtomicU64 {
        match kind {
            RequestKind::List => &self.inner.list_generation,
            RequestKind::Detail => &self.inner.detail_generation,
        }
    }

    /// Bump the generation for `kind` and apply its pending transition atomically.
    fn issue(&self, kind: RequestKind, pending: CatalogIntent) -> u64 {
        let mut guard = self.inner.snapshot.write();
        let generation = self.counter(kind).fetch_add(1, Ordering::SeqCst) + 1;
        reduce_in_place(&mut guard, pending);
        drop(guard);
        self.notify();
        generation
    }

    fn resolve(&self, kind: RequestKind, generation: u64, intent: CatalogIntent) {
        let mut guard = self.inner.snapshot.write();
        let latest = self.counter(kind).load(Ordering::SeqCst);
        if generation != latest {
            tracing::debug!(?kind, generation, latest, "Discarding stale resolution");
            return;
        }
        if let CatalogIntent::MoviesFailed { error } | CatalogIntent::DetailFailed { error } =
            &intent
        {
            tracing::info!(?kind, generation, error = %error, "Catalog fetch failed");
        }
        reduce_in_place(&mut guard, intent);
        drop(guard);
        self.notify();
    }

    fn dispatch(&self, intent: CatalogIntent) {
        reduce_in_place(&mut self.inner.snapshot.write(), intent);
        self.notify();
    }

    fn notify(&self) {
        self.inner.version.send_modify(|version| *version += 1);
    }
}

fn reduce_in_place(state: &mut CatalogSnapshot, intent: CatalogIntent) {
    mvi::reduce_in_place::<CatalogReducer>(state, intent);
}
