use std::future::Future;

use tokio::runtime::Handle;

use crate::catalog::{CatalogSource, Collection, PageRequest};
use crate::present::pagination::{can_go_to, parse_page_input};
use crate::store::{CatalogSnapshot, CatalogStore};

/// Which screen is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List {
        collection: Collection,
        query: Option<String>,
    },
    Detail {
        id: String,
    },
}

impl Route {
    pub fn popular() -> Self {
        Route::List {
            collection: Collection::Popular,
            query: None,
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Route::List {
            collection: Collection::Search,
            query: Some(query.into()),
        }
    }
}

/// What keystrokes currently edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search(String),
    GoToPage(String),
}

/// Front-end state around the catalog store.
///
/// Owns navigation, selection and text input; everything fetched lives in
/// the store and is read back through [`App::snapshot`].
pub struct App<S> {
    store: CatalogStore<S>,
    runtime: Handle,
    route: Route,
    /// List route to return to from a detail view.
    last_list: Route,
    input_mode: InputMode,
    selection: usize,
    per_page: usize,
    image_base_url: String,
    status_message: Option<String>,
    should_quit: bool,
}

impl<S: CatalogSource> App<S> {
    pub fn new(
        store: CatalogStore<S>,
        runtime: Handle,
        per_page: usize,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            runtime,
            route: Route::popular(),
            last_list: Route::popular(),
            input_mode: InputMode::Normal,
            selection: 0,
            per_page,
            image_base_url: image_base_url.into(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.store.snapshot()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Navigate to `route`. List routes start at `page`.
    pub fn navigate(&mut self, route: Route, page: u32) {
        self.status_message = None;
        match &route {
            Route::List { .. } => {
                self.route = route.clone();
                self.last_list = route;
                self.selection = 0;
                self.store.set_current_page(page);
                self.reload_list();
            }
            Route::Detail { id } => {
                let id = id.clone();
                self.route = route;
                self.spawn(self.store.load_detail(id));
            }
        }
    }

    /// Re-issue the list fetch for the current route and page.
    pub fn reload_list(&mut self) {
        let Route::List { collection, query } = &self.route else {
            return;
        };
        let request = PageRequest {
            collection: *collection,
            query: query.clone(),
            page: self.store.snapshot().current_page,
            per_page: self.per_page,
        };
        self.spawn(self.store.load_movies(request));
    }

    /// Change page if the UI policy allows it. Returns whether it did.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if !matches!(self.route, Route::List { .. }) {
            return false;
        }
        let snapshot = self.store.snapshot();
        if !can_go_to(page, snapshot.total_pages) || page == snapshot.current_page {
            return false;
        }
        self.store.set_current_page(page);
        self.selection = 0;
        self.reload_list();
        true
    }

    pub fn next_page(&mut self) -> bool {
        let current = self.store.snapshot().current_page;
        self.go_to_page(current.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        let current = self.store.snapshot().current_page;
        self.go_to_page(current.saturating_sub(1))
    }

    pub fn select_next(&mut self) {
        let len = self.store.snapshot().movies.len();
        if len > 0 {
            self.selection = (self.selection + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    /// Open the detail view for the highlighted movie.
    pub fn open_selected(&mut self) {
        if !matches!(self.route, Route::List { .. }) {
            return;
        }
        let snapshot = self.store.snapshot();
        if let Some(movie) = snapshot.movies.get(self.selection) {
            self.navigate(
                Route::Detail {
                    id: movie.id.to_string(),
                },
                1,
            );
        }
    }

    /// Leave the detail view for the list it was opened from.
    pub fn back(&mut self) {
        if !matches!(self.route, Route::Detail { .. }) {
            return;
        }
        self.route = self.last_list.clone();
        self.store.clear_error();
        if self.store.snapshot().movies.is_empty() {
            self.reload_list();
        }
    }

    pub fn toggle_theme(&mut self) {
        if let Err(err) = self.store.toggle_theme() {
            self.status_message = Some(err.to_string());
        }
    }

    pub fn clear_error(&mut self) {
        self.status_message = None;
        self.store.clear_error();
    }

    pub fn begin_search(&mut self) {
        self.input_mode = InputMode::Search(String::new());
    }

    pub fn begin_go_to_page(&mut self) {
        if matches!(self.route, Route::List { .. }) {
            self.input_mode = InputMode::GoToPage(String::new());
        }
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_input(&mut self, ch: char) {
        match &mut self.input_mode {
            InputMode::Search(text) => text.push(ch),
            InputMode::GoToPage(text) if ch.is_ascii_digit() => text.push(ch),
            _ => {}
        }
    }

    pub fn pop_input(&mut self) {
        match &mut self.input_mode {
            InputMode::Search(text) | InputMode::GoToPage(text) => {
                text.pop();
            }
            InputMode::Normal => {}
        }
    }

    /// Submit the active input box. Blank searches and invalid pages are ignored.
    pub fn submit_input(&mut self) {
        match std::mem::replace(&mut self.input_mode, InputMode::Normal) {
            InputMode::Search(text) => {
                let query = text.trim();
                if !query.is_empty() {
                    self.navigate(Route::search(query), 1);
                }
            }
            InputMode::GoToPage(text) => {
                let total = self.store.snapshot().total_pages;
                if let Some(page) = parse_page_input(&text, total) {
                    self.go_to_page(page);
                }
            }
            InputMode::Normal => {}
        }
    }

    fn spawn(&self, fut: impl Future<Output = ()> + Send + 'static) {
        self.runtime.spawn(fut);
    }
}
