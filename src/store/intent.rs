use crate::catalog::{FetchError, MovieDetail, MoviePage, MovieSummary};
use super::mvi::Intent;

/// Intents that can be dispatched to the catalog reducer.
#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A list fetch was submitted.
    MoviesRequested,
    MoviesLoaded {
        page: MoviePage,
    },
    MoviesFailed {
        error: FetchError,
    },

    /// A detail fetch was submitted.
    DetailRequested,
    DetailLoaded {
        detail: Box<MovieDetail>,
    },
    DetailFailed {
        error: FetchError,
    },

    /// Overwrite the current page. Bounds are the caller's business.
    SetCurrentPage {
        page: u32,
    },
    ToggleTheme,
    ClearError,

    /// Replace individual fields directly.
    Patch(SnapshotPatch),
}

impl Intent for CatalogIntent {}

/// Field-level replacement of a snapshot. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotPatch {
    pub movies: Option<Vec<MovieSummary>>,
    pub selected_detail: Option<Option<MovieDetail>>,
    pub loading: Option<bool>,
    pub error: Option<Option<FetchError>>,
    pub current_page: Option<u32>,
    pub total_pages: Option<u32>,
}

impl SnapshotPatch {
    pub fn movies(mut self, movies: Vec<MovieSummary>) -> Self {
        self.movies = Some(movies);
        self
    }

    pub fn selected_detail(mut self, detail: Option<MovieDetail>) -> Self {
        self.selected_detail = Some(detail);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn error(mut self, error: Option<FetchError>) -> Self {
        self.error = Some(error);
        self
    }

    pub fn current_page(mut self, page: u32) -> Self {
        self.current_page = Some(page);
        self
    }

    pub fn total_pages(mut self, total: u32) -> Self {
        self.total_pages = Some(total);
        self
    }
}
