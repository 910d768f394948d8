use crate::catalog::{FetchError, MovieDetail, MovieSummary, PAGE_CAP};
use super::mvi::UiState;

/// Everything the presentation layer is allowed to see.
///
/// Invariants kept by the reducer:
/// - `current_page >= 1` after any fetch resolution
/// - `total_pages <= PAGE_CAP`
/// - `error.is_some()` implies `!loading`
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    /// Current list view. Kept while a new list fetch is pending.
    pub movies: Vec<MovieSummary>,
    /// Current detail view. Dropped as soon as a new detail fetch starts.
    pub selected_detail: Option<MovieDetail>,
    pub loading: bool,
    pub error: Option<FetchError>,
    pub current_page: u32,
    pub total_pages: u32,
    pub dark_mode: bool,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            selected_detail: None,
            loading: false,
            error: None,
            current_page: 1,
            total_pages: 0,
            dark_mode: false,
        }
    }
}

impl UiState for CatalogSnapshot {}

impl CatalogSnapshot {
    /// Initial snapshot with the persisted theme applied.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    /// Highest page the UI may navigate to.
    pub fn last_page(&self) -> u32 {
        self.total_pages.min(PAGE_CAP)
    }
}
