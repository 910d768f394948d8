use std::path::PathBuf;

use clap::Parser;

use crate::ui::Route;

/// Browse popular and searched movies from TMDB in the terminal.
#[derive(Debug, Parser)]
#[command(name = "moviebase", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/moviebase/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with the results of this search.
    #[arg(long, value_name = "QUERY", conflicts_with = "movie")]
    pub search: Option<String>,

    /// Start on the detail page of this movie id.
    #[arg(long, value_name = "ID")]
    pub movie: Option<String>,

    /// Start on this list page.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

impl Cli {
    /// Route to open on startup.
    pub fn initial_route(&self) -> Route {
        if let Some(id) = &self.movie {
            return Route::Detail { id: id.clone() };
        }
        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => Route::search(query),
            _ => Route::popular(),
        }
    }
}
