use crate::catalog::{clamp_page, PAGE_CAP};

use super::intent::{CatalogIntent, SnapshotPatch};
use super::mvi::Reducer;
use super::state::CatalogSnapshot;

/// Reducer for catalog state transitions.
///
/// Pure: fetching and preference persistence happen in the store around the
/// dispatch call.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogSnapshot;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // The previous list stays visible until the new one arrives.
            CatalogIntent::MoviesRequested => CatalogSnapshot {
                loading: true,
                error: None,
                ..state
            },
            CatalogIntent::MoviesLoaded { page } => CatalogSnapshot {
                loading: false,
                movies: page.items,
                total_pages: page.total_pages.min(PAGE_CAP),
                current_page: clamp_page(page.page),
                ..state
            },
            CatalogIntent::MoviesFailed { error } => CatalogSnapshot {
                loading: false,
                error: Some(error),
                movies: Vec::new(),
                ..state
            },

            CatalogIntent::DetailRequested => CatalogSnapshot {
                loading: true,
                error: None,
                selected_detail: None,
                ..state
            },
            CatalogIntent::DetailLoaded { detail } => CatalogSnapshot {
                loading: false,
                selected_detail: Some(*detail),
                ..state
            },
            CatalogIntent::DetailFailed { error } => CatalogSnapshot {
                loading: false,
                error: Some(error),
                selected_detail: None,
                ..state
            },

            CatalogIntent::SetCurrentPage { page } => CatalogSnapshot {
                current_page: page,
                ..state
            },
            CatalogIntent::ToggleTheme => CatalogSnapshot {
                dark_mode: !state.dark_mode,
                ..state
            },
            CatalogIntent::ClearError => CatalogSnapshot {
                error: None,
                ..state
            },
            CatalogIntent::Patch(patch) => apply_patch(state, patch),
        }
    }
}

fn apply_patch(mut state: CatalogSnapshot, patch: SnapshotPatch) -> CatalogSnapshot {
    if let Some(movies) = patch.movies {
        state.movies = movies;
        state.error = None;
    }
    if let Some(detail) = patch.selected_detail {
        state.selected_detail = detail;
        state.error = None;
    }
    if let Some(loading) = patch.loading {
        state.loading = loading;
        // A patch that starts loading without naming an error is a new request.
        if loading && patch.error.is_none() {
            state.error = None;
        }
    }
    if let Some(error) = patch.error {
        if error.is_some() {
            state.loading = false;
        }
        state.error = error;
    }
    if let Some(page) = patch.current_page {
        state.current_page = page;
    }
    if let Some(total) = patch.total_pages {
        state.total_pages = total.min(PAGE_CAP);
    }
    state
}
